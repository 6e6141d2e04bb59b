//! Single-line text field for the item form.
//!
//! The cursor counts characters, not bytes, so Cyrillic and CJK item names
//! edit correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Editable line of text with a label and a cursor.
#[derive(Debug, Clone)]
pub struct TextInput {
    label: String,
    value: String,
    /// Character index; `value.chars().count()` means after the last char
    cursor: usize,
}

impl TextInput {
    /// Empty field with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
        }
    }

    /// Pre-filled field with the cursor at the end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.len();
        self
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_at(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Applies an editing key. Returns `false` for keys the field ignores,
    /// so the caller can use them for navigation.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('u') {
                self.value.clear();
                self.cursor = 0;
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_at(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_at(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Delete if self.cursor < self.len() => {
                let at = self.byte_at(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Backspace | KeyCode::Delete => {}
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => return false,
        }
        true
    }

    /// Draws the field in a bordered box; the cursor is shown only when focused.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", self.label));
        let inner = block.inner(area);
        block.render(area, buf);

        if !focused {
            Paragraph::new(self.value.as_str()).render(inner, buf);
            return;
        }

        let (before, rest) = self.value.split_at(self.byte_at(self.cursor));
        let mut rest = rest.chars();
        let under_cursor = rest.next().unwrap_or(' ');
        let cursor_style = Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor.to_string(), cursor_style),
            Span::raw(rest.collect::<String>()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
