//! Application state façade
//!
//! `State` is what the front ends talk to. It forwards every storage call
//! unchanged to [`Database`] and tracks whether quitting the application
//! was requested.

use crate::db::Database;
use crate::error::Result;
use crate::types::{Class, Group, Student};

pub struct State {
    db: Database,
    quit: bool,
}

impl State {
    pub fn new(db: Database) -> Self {
        Self { db, quit: false }
    }

    pub async fn students(&self) -> Result<Vec<Student>> {
        self.db.students().await
    }

    pub async fn classes(&self) -> Result<Vec<Class>> {
        self.db.classes().await
    }

    pub async fn groups(&self) -> Result<Vec<Group>> {
        self.db.groups().await
    }

    pub async fn add_student(&self, name: &str, surname: &str) -> Result<Student> {
        self.db.add_student(name, surname).await
    }

    pub async fn add_class(&self, year: &str, modifier: &str) -> Result<Class> {
        self.db.add_class(year, modifier).await
    }

    pub async fn assign_class_to_student(
        &self,
        year: &str,
        modifier: &str,
        student_id: i64,
    ) -> Result<()> {
        self.db.assign_class_to_student(year, modifier, student_id).await
    }

    /// Request quitting the application
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether quitting the application was requested
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Close the underlying database
    pub async fn close(self) {
        self.db.close().await;
    }
}
