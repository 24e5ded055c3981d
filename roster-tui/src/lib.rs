//! roster-tui library
//!
//! Exports the screen state machine and the service bridge for testing
//! and for driving the roster headlessly.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Effect, Screen};
pub use error::{Result, TuiError};
