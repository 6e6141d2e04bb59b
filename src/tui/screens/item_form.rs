//! Add/edit form for a single item, shown as a popup over the browser.
//!
//! Field order: name, region, X, Y, kind, collected (edit only), notes.
//! Tab/↓ and Shift+Tab/↑ move between fields, ←/→ or Space change the
//! region, kind and collected fields, Enter submits and Esc cancels.
//! The form checks the name and coordinates itself; duplicate detection is
//! left to the tracker, whose error the caller hands back via
//! [`ItemForm::set_error`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::{
    commands::parse_coordinate,
    item::{Item, ItemId, ItemKind, Region},
    tui::{
        centered_rect, dim_background, event::TuiEvent, widgets::TextInput, AppResult, TuiApp,
    },
};

const FORM_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Region,
    X,
    Y,
    Kind,
    Collected,
    Notes,
}

impl Field {
    const ADD: [Self; 6] = [
        Self::Name,
        Self::Region,
        Self::X,
        Self::Y,
        Self::Kind,
        Self::Notes,
    ];

    const EDIT: [Self; 7] = [
        Self::Name,
        Self::Region,
        Self::X,
        Self::Y,
        Self::Kind,
        Self::Collected,
        Self::Notes,
    ];
}

/// Validated form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFormOutput {
    pub name: String,
    pub region: Region,
    pub x: f64,
    pub y: f64,
    pub kind: ItemKind,
    pub collected: bool,
    pub notes: String,
}

/// Form state.
#[derive(Debug, Clone)]
pub struct ItemForm {
    /// Set when editing an existing item
    editing: Option<ItemId>,
    fields: &'static [Field],
    focus: usize,
    name: TextInput,
    region: Region,
    x: TextInput,
    y: TextInput,
    kind: ItemKind,
    collected: bool,
    notes: TextInput,
    error: Option<String>,
}

impl ItemForm {
    /// Empty form for a new item in the given region.
    pub fn for_new(region: Region) -> Self {
        Self {
            editing: None,
            fields: &Field::ADD,
            focus: 0,
            name: TextInput::new("Name"),
            region,
            x: TextInput::new("X"),
            y: TextInput::new("Y"),
            kind: ItemKind::default(),
            collected: false,
            notes: TextInput::new("Notes"),
            error: None,
        }
    }

    /// Form pre-filled from an existing item.
    pub fn for_item(item: &Item) -> Self {
        Self {
            editing: Some(item.id.clone()),
            fields: &Field::EDIT,
            focus: 0,
            name: TextInput::new("Name").with_value(&item.name),
            region: item.region,
            // Display prints the shortest text that parses back to the same value
            x: TextInput::new("X").with_value(item.x.to_string()),
            y: TextInput::new("Y").with_value(item.y.to_string()),
            kind: item.kind,
            collected: item.collected,
            notes: TextInput::new("Notes").with_value(&item.notes),
            error: None,
        }
    }

    /// The item being edited, `None` for a new one.
    pub const fn editing(&self) -> Option<&ItemId> {
        self.editing.as_ref()
    }

    /// Shows an error below the fields; the form stays open.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn focused(&self) -> Field {
        self.fields[self.focus]
    }

    fn focus_on(&mut self, field: Field) {
        if let Some(index) = self.fields.iter().position(|f| *f == field) {
            self.focus = index;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields.len();
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn text_field(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::X => Some(&mut self.x),
            Field::Y => Some(&mut self.y),
            Field::Notes => Some(&mut self.notes),
            Field::Region | Field::Kind | Field::Collected => None,
        }
    }

    fn on_choice(&self) -> bool {
        matches!(
            self.focused(),
            Field::Region | Field::Kind | Field::Collected
        )
    }

    fn cycle_choice(&mut self, forward: bool) {
        match self.focused() {
            Field::Region => self.region = step(&Region::ALL, self.region, forward),
            Field::Kind => self.kind = step(&ItemKind::ALL, self.kind, forward),
            Field::Collected => self.collected = !self.collected,
            Field::Name | Field::X | Field::Y | Field::Notes => {}
        }
    }

    fn submit(&mut self) -> Option<ItemFormOutput> {
        let name = self.name.value().trim().to_string();
        if name.is_empty() {
            self.error = Some("Name is required".to_string());
            self.focus_on(Field::Name);
            return None;
        }

        let x = match parse_coordinate(self.x.value()) {
            Ok(x) => x,
            Err(reason) => {
                self.error = Some(format!("X: {reason}"));
                self.focus_on(Field::X);
                return None;
            }
        };
        let y = match parse_coordinate(self.y.value()) {
            Ok(y) => y,
            Err(reason) => {
                self.error = Some(format!("Y: {reason}"));
                self.focus_on(Field::Y);
                return None;
            }
        };

        self.error = None;
        Some(ItemFormOutput {
            name,
            region: self.region,
            x,
            y,
            kind: self.kind,
            collected: self.collected,
            notes: self.notes.value().trim().to_string(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<ItemFormOutput>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        match key.code {
            KeyCode::Esc => return Some(AppResult::Cancelled),
            KeyCode::Enter => return self.submit().map(AppResult::Done),
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Right | KeyCode::Char(' ') if self.on_choice() => self.cycle_choice(true),
            KeyCode::Left if self.on_choice() => self.cycle_choice(false),
            _ => {
                let field = self.focused();
                if let Some(input) = self.text_field(field) {
                    input.handle_key(key);
                }
            }
        }
        None
    }

    fn render_choice(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let (label, value) = match field {
            Field::Region => ("Region", self.region.name()),
            Field::Kind => ("Kind", self.kind.label()),
            _ => ("Collected", if self.collected { "Yes" } else { "No" }),
        };
        let focused = self.focused() == field;
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let arrows = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });

        let line = Line::from(vec![
            Span::styled("◀ ", arrows),
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", arrows),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {label} ")),
            )
            .render(area, buf);
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        // X and Y share a row
        let rows = self.fields.len() - 1;
        let height = u16::try_from(rows * 3 + 4).unwrap_or(u16::MAX);
        let popup = centered_rect(FORM_WIDTH, height, area);

        dim_background(area, buf);
        Clear.render(popup, buf);

        let title = if self.editing.is_some() {
            " Edit Item "
        } else {
            " New Item "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut constraints = vec![Constraint::Length(3); rows];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(inner);

        let mut row = 0;
        for field in self.fields {
            let focused = self.focused() == *field;
            match field {
                Field::Name => self.name.render(areas[row], buf, focused),
                Field::X => {
                    let [left, _] =
                        Layout::horizontal([Constraint::Percentage(50); 2]).areas(areas[row]);
                    self.x.render(left, buf, focused);
                    continue;
                }
                Field::Y => {
                    let [_, right] =
                        Layout::horizontal([Constraint::Percentage(50); 2]).areas(areas[row]);
                    self.y.render(right, buf, focused);
                }
                Field::Notes => self.notes.render(areas[row], buf, focused),
                Field::Region | Field::Kind | Field::Collected => {
                    self.render_choice(*field, areas[row], buf);
                }
            }
            row += 1;
        }

        if let Some(ref error) = self.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .render(areas[row], buf);
        }

        let key = Style::default().fg(Color::Cyan);
        let help = Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(" Next  "),
            Span::styled("←→", key),
            Span::raw(" Change  "),
            Span::styled("Enter", key),
            Span::raw(" Save  "),
            Span::styled("Esc", key),
            Span::raw(" Cancel"),
        ]);
        Paragraph::new(help).render(areas[row + 1], buf);
    }
}

/// Next or previous option, wrapping around.
fn step<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let count = options.len();
    let next = if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    };
    options[next]
}

impl TuiApp for ItemForm {
    type Output = ItemFormOutput;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        self.render_form(frame.area(), frame.buffer_mut());
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn press(form: &mut ItemForm, code: KeyCode) -> Option<AppResult<ItemFormOutput>> {
        form.handle_event(&TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(form: &mut ItemForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    fn stored() -> Item {
        Item {
            id: ItemId::from("0A2BK4"),
            name: "Chest A".to_string(),
            region: Region::Liyue,
            x: 242.205_164_734_718_66,
            y: -0.1,
            kind: ItemKind::Chest,
            collected: false,
            date_added: NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            notes: "cliff".to_string(),
        }
    }

    #[test]
    fn test_fill_and_submit_new_item() {
        let mut form = ItemForm::for_new(Region::Mondstadt);
        type_text(&mut form, "Сундук");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "-12.5");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "40");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Left);
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, " под мостом ");

        let Some(AppResult::Done(output)) = press(&mut form, KeyCode::Enter) else {
            panic!("form should submit");
        };
        assert_eq!(output.name, "Сундук");
        assert_eq!(output.region, Region::Liyue);
        assert!((output.x + 12.5).abs() < f64::EPSILON);
        assert!((output.y - 40.0).abs() < f64::EPSILON);
        assert_eq!(output.kind, ItemKind::Weapon);
        assert!(!output.collected);
        assert_eq!(output.notes, "под мостом");
    }

    #[test]
    fn test_new_form_has_no_collected_field() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        for _ in 0..5 {
            press(&mut form, KeyCode::Tab);
        }
        assert_eq!(form.focused(), Field::Notes);
        press(&mut form, KeyCode::Tab);
        assert_eq!(form.focused(), Field::Name);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        type_text(&mut form, "   ");
        press(&mut form, KeyCode::Tab);
        assert_eq!(press(&mut form, KeyCode::Enter), None);
        assert_eq!(form.error.as_deref(), Some("Name is required"));
        assert_eq!(form.focused(), Field::Name);
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        type_text(&mut form, "Oculus");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "5");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "1000.5");
        press(&mut form, KeyCode::Tab);

        assert_eq!(press(&mut form, KeyCode::Enter), None);
        assert!(form.error.as_deref().is_some_and(|e| e.starts_with("Y:")));
        assert_eq!(form.focused(), Field::Y);
    }

    #[test]
    fn test_edit_prefills_and_keeps_values() {
        let item = stored();
        let mut form = ItemForm::for_item(&item);
        assert_eq!(form.editing(), Some(&item.id));

        let Some(AppResult::Done(output)) = press(&mut form, KeyCode::Enter) else {
            panic!("form should submit");
        };
        assert_eq!(output.name, item.name);
        assert_eq!(output.region, item.region);
        assert_eq!(output.x.to_bits(), item.x.to_bits());
        assert_eq!(output.y.to_bits(), item.y.to_bits());
        assert_eq!(output.kind, item.kind);
        assert_eq!(output.notes, item.notes);
    }

    #[test]
    fn test_edit_toggles_collected() {
        let mut form = ItemForm::for_item(&stored());
        for _ in 0..5 {
            press(&mut form, KeyCode::Down);
        }
        assert_eq!(form.focused(), Field::Collected);
        press(&mut form, KeyCode::Char(' '));

        let Some(AppResult::Done(output)) = press(&mut form, KeyCode::Enter) else {
            panic!("form should submit");
        };
        assert!(output.collected);
    }

    #[test]
    fn test_space_types_in_text_fields() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        type_text(&mut form, "Cor Lapis");
        assert_eq!(form.name.value(), "Cor Lapis");
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        type_text(&mut form, "q");
        assert_eq!(press(&mut form, KeyCode::Esc), Some(AppResult::Cancelled));
    }

    #[test]
    fn test_up_wraps_to_last_field() {
        let mut form = ItemForm::for_new(Region::Sumeru);
        press(&mut form, KeyCode::Up);
        assert_eq!(form.focused(), Field::Notes);
    }
}
