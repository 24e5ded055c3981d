//! Core types for Roster

use serde::{Deserialize, Serialize};
use std::fmt;

/// A row in the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

/// A row in the `classes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub year: String,
    pub modifier: String,
}

/// A student's current class assignment
///
/// Despite the name there is exactly one group row per student, keyed by
/// the student's id. `year` and `modifier` stay `None` until a class is
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub student_id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub year: Option<String>,
    pub modifier: Option<String>,
}

impl Group {
    /// Whether a class has been assigned to this student
    pub fn is_assigned(&self) -> bool {
        self.year.is_some() && self.modifier.is_some()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.surname, self.name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.id, self.year, self.modifier)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name.as_deref().unwrap_or(""),
            self.surname.as_deref().unwrap_or(""),
            self.year.as_deref().unwrap_or("-"),
            self.modifier.as_deref().unwrap_or("-"),
        )
    }
}
