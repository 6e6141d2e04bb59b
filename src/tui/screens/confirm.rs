//! Yes/no confirmation popup.
//!
//! Rendered on top of another screen, which forwards key events to it while
//! it is open.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::{centered_rect, dim_background, event::TuiEvent, AppResult, TuiApp};

/// Confirmation dialog state.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    message: String,
    selected: bool, // true = Yes, false = No
}

impl ConfirmDialog {
    /// Create a dialog with "Yes" preselected.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected: true,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn popup_size(&self) -> (u16, u16) {
        let msg_width = self.message.width().min(usize::from(u16::MAX - 4)) as u16;
        (msg_width.max(20) + 4, 5)
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.popup_size();
        let popup_area = centered_rect(width, height, area);

        dim_background(area, buf);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        Paragraph::new(self.message.as_str())
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let active = Style::default().add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(Color::DarkGray);
        let (yes, yes_style, no, no_style) = if self.selected {
            ("[Yes]", active.fg(Color::Green), " No ", idle)
        } else {
            (" Yes ", idle, "[No]", active.fg(Color::Red))
        };

        let buttons = Line::from(vec![
            Span::raw("  "),
            Span::styled(yes, yes_style),
            Span::raw("   "),
            Span::styled(no, no_style),
        ]);
        if inner.height > 2 {
            Paragraph::new(buttons).render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);
        }
    }
}

impl TuiApp for ConfirmDialog {
    type Output = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        match key.code {
            KeyCode::Char('y' | 'Y') => Some(AppResult::Done(true)),
            KeyCode::Char('n' | 'N') => Some(AppResult::Done(false)),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = true;
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = false;
                None
            }
            KeyCode::Tab => {
                self.selected = !self.selected;
                None
            }
            KeyCode::Enter => Some(AppResult::Done(self.selected)),
            KeyCode::Esc => Some(AppResult::Cancelled),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        self.render_popup(frame.area(), frame.buffer_mut());
    }
}
