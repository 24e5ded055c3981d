//! Roster - a small school roster tool
//!
//! This library owns the SQLite storage for students, classes and their
//! class assignments, the state façade the front ends talk to, and the
//! input validation policy shared by the TUI and CLI.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod state;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use error::{Result, RosterError};
pub use state::State;
pub use types::{Class, Group, Student};
