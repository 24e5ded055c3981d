//! Service layer adapter for the TUI
//!
//! Bridges the async [`libroster::State`] façade and the synchronous run
//! loop. A current-thread tokio runtime executes each storage call to
//! completion before the loop continues, so the application stays
//! single-threaded.
//!
//! # Example
//!
//! ```no_run
//! use roster_tui::app::{Action, AppState, MenuItem};
//! use roster_tui::services::ServiceHandle;
//!
//! # fn example() -> roster_tui::Result<()> {
//! let mut services = ServiceHandle::open("~/.local/share/roster/roster.db")?;
//! let state = services.dispatch(AppState::new(), Action::Select(MenuItem::ListStudents));
//! println!("{} students", state.students.len());
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use libroster::{Class, Database, Group, State, Student};
use tokio::runtime::{Builder, Runtime};

use crate::app::{reduce, Action, AppState, Effect};
use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    state: State,
    runtime: Runtime,
}

impl ServiceHandle {
    /// Open the database at `db_path`, creating it if needed
    pub fn open(db_path: &str) -> Result<Self> {
        let runtime = Self::runtime()?;
        let db = runtime.block_on(Database::new(db_path))?;
        tracing::info!("Opened roster database at {}", db_path);
        Ok(Self::with_database(runtime, db))
    }

    /// Open a throwaway in-memory database
    pub fn in_memory() -> Result<Self> {
        let runtime = Self::runtime()?;
        let db = runtime.block_on(Database::in_memory())?;
        Ok(Self::with_database(runtime, db))
    }

    fn runtime() -> Result<Runtime> {
        Ok(Builder::new_current_thread().enable_all().build()?)
    }

    fn with_database(runtime: Runtime, db: Database) -> Self {
        Self {
            state: State::new(db),
            runtime,
        }
    }

    pub fn students(&self) -> Result<Vec<Student>> {
        Ok(self.runtime.block_on(self.state.students())?)
    }

    pub fn classes(&self) -> Result<Vec<Class>> {
        Ok(self.runtime.block_on(self.state.classes())?)
    }

    pub fn groups(&self) -> Result<Vec<Group>> {
        Ok(self.runtime.block_on(self.state.groups())?)
    }

    pub fn add_student(&self, name: &str, surname: &str) -> Result<Student> {
        Ok(self.runtime.block_on(self.state.add_student(name, surname))?)
    }

    pub fn add_class(&self, year: &str, modifier: &str) -> Result<Class> {
        Ok(self.runtime.block_on(self.state.add_class(year, modifier))?)
    }

    pub fn assign_class_to_student(
        &self,
        year: &str,
        modifier: &str,
        student_id: i64,
    ) -> Result<()> {
        Ok(self
            .runtime
            .block_on(self.state.assign_class_to_student(year, modifier, student_id))?)
    }

    /// Whether a quit was requested
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Execute one effect, returning the follow-up action if there is one
    ///
    /// Storage failures are logged and turned into `ShowError`.
    pub fn execute(&mut self, effect: Effect) -> Option<Action> {
        tracing::debug!(?effect, "Executing effect");

        let result = match effect {
            Effect::AddStudent { name, surname } => {
                self.add_student(&name, &surname).map(|_| None)
            }
            Effect::AddClass { year, modifier } => self.add_class(&year, &modifier).map(|_| None),
            Effect::AssignClassToStudent {
                student_id,
                year,
                modifier,
            } => self
                .assign_class_to_student(&year, &modifier, student_id)
                .map(|_| None),
            Effect::LoadStudents => self.students().map(|s| Some(Action::StudentsLoaded(s))),
            Effect::LoadClasses => self.classes().map(|c| Some(Action::ClassesLoaded(c))),
            Effect::LoadGroups => self.groups().map(|g| Some(Action::GroupsLoaded(g))),
            Effect::Quit => {
                tracing::info!("Quit requested");
                self.state.quit();
                Ok(None)
            }
        };

        match result {
            Ok(action) => action,
            Err(e) => {
                tracing::error!("Storage operation failed: {}", e);
                Some(Action::ShowError(e.to_string()))
            }
        }
    }

    /// Reduce `action` and run every resulting effect, feeding follow-up
    /// actions back through the reducer until nothing is left
    pub fn dispatch(&mut self, state: AppState, action: Action) -> AppState {
        let (mut state, effects) = reduce(state, action);
        let mut queue: VecDeque<Effect> = effects.into();

        while let Some(effect) = queue.pop_front() {
            if let Some(follow_up) = self.execute(effect) {
                let (next, more) = reduce(state, follow_up);
                state = next;
                queue.extend(more);
            }
        }

        state
    }

    /// Close the database
    pub fn shutdown(self) {
        let Self { state, runtime } = self;
        runtime.block_on(state.close());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{MenuItem, Screen};

    #[test]
    fn test_quit_effect_sets_flag() {
        let mut services = ServiceHandle::in_memory().unwrap();
        assert!(!services.should_quit());

        let follow_up = services.execute(Effect::Quit);

        assert!(follow_up.is_none());
        assert!(services.should_quit());
    }

    #[test]
    fn test_load_effect_returns_loaded_action() {
        let mut services = ServiceHandle::in_memory().unwrap();
        services.add_student("Anna", "Berzina").unwrap();

        match services.execute(Effect::LoadStudents) {
            Some(Action::StudentsLoaded(students)) => assert_eq!(students.len(), 1),
            other => panic!("Expected StudentsLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_write_becomes_error_overlay() {
        let mut services = ServiceHandle::in_memory().unwrap();

        let follow_up = services.execute(Effect::AssignClassToStudent {
            student_id: 7,
            year: "9".to_string(),
            modifier: "a".to_string(),
        });

        match follow_up {
            Some(Action::ShowError(message)) => assert!(message.contains("student 7")),
            other => panic!("Expected ShowError, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_loads_list_on_entry() {
        let mut services = ServiceHandle::in_memory().unwrap();
        services.add_class("10", "b").unwrap();

        let state = services.dispatch(AppState::new(), Action::Select(MenuItem::ListClasses));

        assert_eq!(state.current_screen, Screen::ListClass);
        assert_eq!(state.classes.len(), 1);
    }
}
