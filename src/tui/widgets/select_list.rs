//! Single-select scrollable list widget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

/// Actions from list interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// No action, continue
    None,
    /// User confirmed selection
    Confirm,
    /// User cancelled
    Cancel,
}

/// Single-select scrollable list.
#[derive(Debug, Clone)]
pub struct SelectList {
    items: Vec<String>,
    state: ListState,
    title: String,
}

impl SelectList {
    /// Create a new select list.
    pub fn new<T: ToString>(items: Vec<T>) -> Self {
        let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            state,
            title: String::new(),
        }
    }

    /// Set the title shown in the border.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Get the currently selected index.
    pub const fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Check if list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Move selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some((current + len - 1) % len));
    }

    /// Move selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some((current + 1) % len));
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> SelectAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                SelectAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                SelectAction::None
            }
            KeyCode::Enter if self.state.selected().is_some() => SelectAction::Confirm,
            KeyCode::Esc | KeyCode::Char('q') => SelectAction::Cancel,
            _ => SelectAction::None,
        }
    }

    /// Render the widget.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(if self.title.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.title)
            });

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = Some(i) == selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let prefix = if is_selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(item.as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}
