//! Terminal event polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to a [`TuiApp`](super::TuiApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// The terminal was resized
    Resize(u16, u16),
    /// No input within the tick interval
    Tick,
}

/// Blocking event source backed by crossterm.
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl EventHandler {
    /// Create a handler that emits `Tick` after `tick_rate` without input.
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next event.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            if !event::poll(self.tick_rate)? {
                return Ok(TuiEvent::Tick);
            }

            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key));
                }
                Event::Resize(width, height) => return Ok(TuiEvent::Resize(width, height)),
                _ => {}
            }
        }
    }
}
