//! Terminal event polling
//!
//! Turns crossterm events into [`Action`]s, producing a `Tick` when no
//! input arrives within the tick rate.

use crate::app::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Terminal events the run loop cares about
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// No input within the tick rate
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Block for up to one tick waiting for the next event
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }

        Ok(match event::read()? {
            CrosstermEvent::Key(key) => TuiEvent::Key(key),
            CrosstermEvent::Resize(w, h) => TuiEvent::Resize(w, h),
            // Mouse, focus and paste events are not used
            _ => TuiEvent::Tick,
        })
    }
}
