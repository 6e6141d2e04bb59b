//! Generic selection screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    event::TuiEvent,
    run,
    widgets::{SelectAction, SelectList},
    AppResult, TuiApp,
};

/// Selection screen application.
struct SelectScreen {
    list: SelectList,
    prompt: String,
    header: Option<String>,
}

impl SelectScreen {
    fn new(prompt: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            list: SelectList::new(items).with_title("Select"),
            prompt: prompt.into(),
            header: None,
        }
    }

    fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl TuiApp for SelectScreen {
    type Output = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        match self.list.handle_key(*key) {
            SelectAction::Confirm => self.list.selected_index().map(AppResult::Done),
            SelectAction::Cancel => Some(AppResult::Cancelled),
            SelectAction::None => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let header_height = u16::from(self.header.is_some());
        let [prompt_area, header_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(header_height),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let prompt = Paragraph::new(self.prompt.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(prompt, prompt_area);

        if let Some(ref header) = self.header {
            // Border plus "> " prefix
            let header = Paragraph::new(format!("   {header}")).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(header, header_area);
        }

        self.list.render(list_area, frame.buffer_mut(), true);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Select  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" Cancel"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }
}

/// Select from a list of options.
///
/// Returns `Some(index)` if an item was selected, `None` if cancelled.
pub fn select_from_list<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    if items.is_empty() {
        anyhow::bail!("No items to select from");
    }
    run(SelectScreen::new(prompt, items))
}

/// Select from a list of options with a column header above the list.
pub fn select_from_list_with_header<T: ToString>(
    prompt: &str,
    header: &str,
    options: &[T],
) -> Result<Option<usize>> {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    if items.is_empty() {
        anyhow::bail!("No items to select from");
    }
    run(SelectScreen::new(prompt, items).with_header(header))
}
