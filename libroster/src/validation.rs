//! Input validation for roster forms
//!
//! The same rules gate the TUI "Save" action and the CLI subcommands:
//!
//! - every required field must be non-empty after trimming surrounding
//!   whitespace
//! - names and surnames contain letters only (no digits, punctuation,
//!   symbols or inner whitespace)
//! - class years contain ASCII digits only
//! - class modifiers contain letters only
//!
//! Values handed to storage are the trimmed field values.

use crate::error::{Result, RosterError};

/// The kind of a form field, which selects its character class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Surname,
    Year,
    Modifier,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Surname => "Surname",
            FieldKind::Year => "Year",
            FieldKind::Modifier => "Modifier",
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            FieldKind::Name | FieldKind::Surname | FieldKind::Modifier => c.is_alphabetic(),
            FieldKind::Year => c.is_ascii_digit(),
        }
    }

    fn rule(&self) -> &'static str {
        match self {
            FieldKind::Name | FieldKind::Surname | FieldKind::Modifier => {
                "may only contain letters"
            }
            FieldKind::Year => "may only contain digits",
        }
    }
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    /// Whether every field passed
    pub valid: bool,
    /// One message per failing field
    pub errors: Vec<String>,
}

impl ValidationResponse {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into a `Result`, joining all messages into one `InvalidInput`
    pub fn into_result(self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(RosterError::InvalidInput(self.errors.join("; ")))
        }
    }
}

/// Check a single field, returning the trimmed value on success
pub fn check_field(kind: FieldKind, raw: &str) -> std::result::Result<&str, String> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(format!("{} cannot be empty", kind.label()));
    }

    if !value.chars().all(|c| kind.accepts(c)) {
        return Err(format!("{} {}", kind.label(), kind.rule()));
    }

    Ok(value)
}

fn validate_pair(fields: [(FieldKind, &str); 2]) -> ValidationResponse {
    let errors = fields
        .iter()
        .filter_map(|(kind, raw)| check_field(*kind, raw).err())
        .collect();
    ValidationResponse::from_errors(errors)
}

/// Validate an "add student" form
pub fn validate_student(name: &str, surname: &str) -> ValidationResponse {
    validate_pair([(FieldKind::Name, name), (FieldKind::Surname, surname)])
}

/// Validate an "add class" or "assign class" form
pub fn validate_class(year: &str, modifier: &str) -> ValidationResponse {
    validate_pair([(FieldKind::Year, year), (FieldKind::Modifier, modifier)])
}
