//! Terminal screens for lootlist: the `loot browse` item table with its
//! add/edit form and save prompt, and the list picker used by `loot mark`.
//!
//! Each screen is a [`TuiApp`]. [`run`] puts the terminal in raw mode on the
//! alternate screen, feeds key events to the screen until it finishes, and
//! restores the terminal afterwards. Popups (confirm dialog, item form) are
//! not run on their own; the browser forwards events to whichever is open.

pub mod event;
pub mod screens;
pub mod terminal;
pub mod widgets;

use anyhow::Result;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

use crate::tui::event::{EventHandler, TuiEvent};
use crate::tui::terminal::TerminalGuard;

/// How a screen or popup finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// Application completed with a value
    Done(T),
    /// Application was cancelled by user
    Cancelled,
}

/// A screen or popup driven by key events.
pub trait TuiApp {
    /// The output type when the application completes.
    type Output;

    /// Handle an event and optionally return a result.
    ///
    /// Return `Some(AppResult)` to exit the application,
    /// or `None` to continue running.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Render the application to the frame.
    fn render(&mut self, frame: &mut Frame);
}

/// Runs a screen until it finishes.
///
/// Returns `Ok(None)` when the user cancelled.
pub fn run<A: TuiApp>(mut app: A) -> Result<Option<A::Output>> {
    let mut terminal = TerminalGuard::new()?;
    let events = EventHandler::default();

    loop {
        terminal.terminal().draw(|frame| app.render(frame))?;

        let event = events.next()?;
        if let Some(result) = app.handle_event(&event) {
            return match result {
                AppResult::Done(output) => Ok(Some(output)),
                AppResult::Cancelled => Ok(None),
            };
        }
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Greys out everything already drawn in `area`, so a popup stands out.
pub(crate) fn dim_background(area: Rect, buf: &mut Buffer) {
    let dim = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}
