//! Full-screen item table with region filter, status toggling, saving, and
//! an add/edit form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::{
    item::{timestamp, FilterCriteria, Item, ItemId, Region},
    tracker::{self, ItemUpdate, NewItem, Tracker},
    tui::{
        event::TuiEvent,
        run,
        screens::{ConfirmDialog, ItemForm, ItemFormOutput},
        AppResult, TuiApp,
    },
};

/// How the browser was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseExit {
    /// No unsaved changes remained
    Clean,
    /// Changes were saved on the way out
    Saved,
    /// The user chose to quit without saving
    Discarded,
}

/// Browser state over a borrowed tracker.
pub struct BrowseScreen<'a> {
    tracker: &'a mut Tracker,
    /// None shows every region
    region: Option<Region>,
    selected: Option<ItemId>,
    table: TableState,
    status: Option<String>,
    confirm: Option<ConfirmDialog>,
    form: Option<ItemForm>,
}

impl<'a> BrowseScreen<'a> {
    /// Create a browser showing all regions.
    pub fn new(tracker: &'a mut Tracker) -> Self {
        let selected = tracker.list_all().first().map(|item| item.id.clone());
        Self {
            tracker,
            region: None,
            selected,
            table: TableState::default(),
            status: None,
            confirm: None,
            form: None,
        }
    }

    fn visible(&self) -> Vec<&Item> {
        match self.region {
            Some(region) => self.tracker.filter(&FilterCriteria::region(region)),
            None => self.tracker.list_all().iter().collect(),
        }
    }

    fn selected_row(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.visible().iter().position(|item| item.id == *id)
    }

    fn move_selection(&mut self, down: bool) {
        let ids: Vec<ItemId> = self.visible().iter().map(|item| item.id.clone()).collect();
        if ids.is_empty() {
            self.selected = None;
            return;
        }

        let next = match self.selected_row() {
            Some(row) if down => (row + 1).min(ids.len() - 1),
            Some(row) => row.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(ids[next].clone());
    }

    fn cycle_region(&mut self, forward: bool) {
        let options = Region::ALL.len() + 1;
        let current = self
            .region
            .and_then(|region| Region::ALL.iter().position(|r| *r == region))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % options
        } else {
            (current + options - 1) % options
        };
        self.region = next.checked_sub(1).map(|i| Region::ALL[i]);

        if self.selected_row().is_none() {
            self.selected = self.visible().first().map(|item| item.id.clone());
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        self.status = Some(match self.tracker.toggle(&id) {
            Ok(item) if item.collected => format!("Collected: {}", item.name),
            Ok(item) => format!("Not collected: {}", item.name),
            Err(err) => format!("Error: {err}"),
        });
    }

    fn save(&mut self) -> bool {
        match self.tracker.save() {
            Ok(metadata) => {
                self.status = Some(format!("Saved {} items", metadata.total_items));
                true
            }
            Err(err) => {
                self.status = Some(format!("Save failed: {err}"));
                false
            }
        }
    }

    fn request_quit(&mut self) -> Option<AppResult<BrowseExit>> {
        if self.tracker.is_dirty() {
            self.confirm = Some(ConfirmDialog::new("Save changes before quitting?"));
            None
        } else {
            Some(AppResult::Done(BrowseExit::Clean))
        }
    }

    fn handle_confirm(&mut self, event: &TuiEvent) -> Option<AppResult<BrowseExit>> {
        let dialog = self.confirm.as_mut()?;
        match dialog.handle_event(event)? {
            AppResult::Done(true) => {
                self.confirm = None;
                self.save().then_some(AppResult::Done(BrowseExit::Saved))
            }
            AppResult::Done(false) => Some(AppResult::Done(BrowseExit::Discarded)),
            AppResult::Cancelled => {
                self.confirm = None;
                None
            }
        }
    }

    fn open_add_form(&mut self) {
        let region = self.region.unwrap_or(Region::ALL[0]);
        self.form = Some(ItemForm::for_new(region));
    }

    fn open_edit_form(&mut self) {
        let item = self.selected.as_ref().and_then(|id| self.tracker.get(id));
        if let Some(item) = item {
            self.form = Some(ItemForm::for_item(item));
        }
    }

    /// The browser never exits from the form; it only closes it.
    fn handle_form(&mut self, event: &TuiEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match form.handle_event(event) {
            Some(AppResult::Done(output)) => self.apply_form(output),
            Some(AppResult::Cancelled) => self.form = None,
            None => {}
        }
    }

    fn apply_form(&mut self, output: ItemFormOutput) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let result = match form.editing().cloned() {
            Some(id) => self.apply_edit(&id, output),
            None => self.apply_add(output),
        };

        match result {
            Ok(message) => {
                self.status = Some(message);
                self.form = None;
            }
            Err(err) => {
                self.status = Some(format!("Error: {err}"));
                if let Some(form) = self.form.as_mut() {
                    form.set_error(err.to_string());
                }
            }
        }
    }

    fn apply_edit(&mut self, id: &ItemId, output: ItemFormOutput) -> tracker::Result<String> {
        let name = output.name.clone();
        let changed = self.tracker.edit(
            id,
            ItemUpdate {
                name: Some(output.name),
                region: Some(output.region),
                x: Some(output.x),
                y: Some(output.y),
                kind: Some(output.kind),
                notes: Some(output.notes),
                collected: Some(output.collected),
            },
        )?;
        self.keep_selected_visible();
        Ok(if changed {
            format!("Updated: {name}")
        } else {
            "No changes".to_string()
        })
    }

    fn apply_add(&mut self, output: ItemFormOutput) -> tracker::Result<String> {
        let id = self
            .tracker
            .add(NewItem {
                name: output.name,
                region: output.region,
                x: output.x,
                y: output.y,
                kind: output.kind,
            })?
            .id
            .clone();
        if !output.notes.is_empty() {
            let notes = ItemUpdate {
                notes: Some(output.notes),
                ..ItemUpdate::default()
            };
            self.tracker.edit(&id, notes)?;
        }

        let message = match self.tracker.get(&id) {
            Some(item) => format!("Added: {}", item.name),
            None => "Added".to_string(),
        };
        self.selected = Some(id);
        self.keep_selected_visible();
        Ok(message)
    }

    /// Drops the region filter if it hides the selected item.
    fn keep_selected_visible(&mut self) {
        if self.selected.is_some() && self.selected_row().is_none() {
            self.region = None;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppResult<BrowseExit>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.request_quit();
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.cycle_region(true),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.cycle_region(false),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('s') => {
                self.save();
            }
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('q') | KeyCode::Esc => return self.request_quit(),
            _ => {}
        }
        None
    }

    fn filter_line(&self) -> Line<'static> {
        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(Color::DarkGray);

        let mut spans = vec![Span::styled(
            " All ",
            if self.region.is_none() { active } else { idle },
        )];
        for region in Region::ALL {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {region} "),
                if self.region == Some(region) { active } else { idle },
            ));
        }
        Line::from(spans)
    }

    fn footer_line(&self) -> Line<'static> {
        let stats = self.tracker.stats();
        let mut spans = vec![
            Span::raw(format!("Total {}  ", stats.total)),
            Span::styled(
                format!("Collected {}  ", stats.collected),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("Remaining {}  ", stats.remaining),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("{:.1}%", stats.percentage)),
        ];
        if self.tracker.is_dirty() {
            spans.push(Span::styled("  [modified]", Style::default().fg(Color::Red)));
        }
        if let Some(ref status) = self.status {
            spans.push(Span::raw(format!("  {status}")));
        }
        Line::from(spans)
    }
}

fn item_cells(item: &Item) -> Row<'static> {
    let mark_style = if item.collected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Row::new(vec![
        Cell::from(item.status_mark()).style(mark_style),
        Cell::from(item.name.clone()),
        Cell::from(item.region.name()),
        Cell::from(item.kind.label()),
        Cell::from(format!("{:.1}", item.x)),
        Cell::from(format!("{:.1}", item.y)),
        Cell::from(timestamp::format(&item.date_added)),
        Cell::from(item.notes.clone()),
    ])
}

impl TuiApp for BrowseScreen<'_> {
    type Output = BrowseExit;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        if self.confirm.is_some() {
            return self.handle_confirm(event);
        }
        if self.form.is_some() {
            self.handle_form(event);
            return None;
        }

        match event {
            TuiEvent::Key(key) => self.handle_key(*key),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [filter_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let filter = Paragraph::new(self.filter_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Region "),
        );
        frame.render_widget(filter, filter_area);

        let rows: Vec<Row> = self.visible().into_iter().map(item_cells).collect();
        let header = Row::new(["", "Name", "Region", "Kind", "X", "Y", "Added", "Notes"])
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        let widths = [
            Constraint::Length(1),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(19),
            Constraint::Min(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Items "))
            .row_highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.table.select(self.selected_row());
        frame.render_stateful_widget(table, table_area, &mut self.table);

        let help = Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Move  "),
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(" Region  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" Toggle  "),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::raw(" Add  "),
            Span::styled("e", Style::default().fg(Color::Cyan)),
            Span::raw(" Edit  "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(" Save  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ]);
        let footer = Paragraph::new(vec![self.footer_line(), help]).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(footer, footer_area);

        if let Some(ref mut form) = self.form {
            form.render(frame);
        }
        if let Some(ref mut dialog) = self.confirm {
            dialog.render(frame);
        }
    }
}

/// Runs the browser. Returns `None` if the terminal session was cancelled.
pub fn browse(tracker: &mut Tracker) -> Result<Option<BrowseExit>> {
    run(BrowseScreen::new(tracker))
}
