//! Screen state machine
//!
//! - Actions: what can happen
//! - State: what is true right now, including per-screen form state
//! - Reducer: pure function (State, Action) -> (State, Effects)
//!
//! The reducer is independent of rendering and storage, so navigation can
//! be driven and tested headlessly.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Effect, MenuItem, Screen};
pub use reducer::reduce;
pub use state::{AppState, ClassForm, FormField, StudentForm, UiConfig};
