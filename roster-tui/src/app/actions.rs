//! Actions, screens and effects for the reducer pattern
//!
//! Actions describe what happened (a key press, a menu choice, data
//! arriving from storage). Effects describe what the run loop must do
//! outside the reducer (write to storage, load a table, quit).

use crossterm::event::KeyEvent;
use libroster::{Class, Group, Student};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event, mapped to one of the semantic actions below
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Main menu entry chosen
    Select(MenuItem),

    /// "Close" button of a sub-screen
    Close,

    /// "Save" button of a form screen
    Save,

    /// "Assign class to student" button on a group row (0-based)
    Assign(usize),

    /// Move the menu or row cursor
    CursorUp,
    CursorDown,

    /// Activate whatever the cursor points at
    Activate,

    // === Form editing ===
    /// Character typed at the cursor of the focused field
    Input(char),

    /// Delete the character before the cursor
    Backspace,

    /// Cursor movement or deletion inside the focused field
    Edit(KeyEvent),

    /// Move focus to the other field of the form
    FocusNext,

    // === Data ===
    StudentsLoaded(Vec<Student>),
    ClassesLoaded(Vec<Class>),
    GroupsLoaded(Vec<Group>),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    AddStudent,
    AddClass,
    ListStudent,
    ListClass,
    ListGroup,
    AssignClassToStudent { student_id: i64 },
}

impl Screen {
    /// Where "close" leads from this screen
    pub fn parent(&self) -> Screen {
        match self {
            Screen::AssignClassToStudent { .. } => Screen::ListGroup,
            _ => Screen::MainMenu,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::MainMenu => "Main menu".to_string(),
            Screen::AddStudent => "Add student".to_string(),
            Screen::AddClass => "Add class".to_string(),
            Screen::ListStudent => "Students".to_string(),
            Screen::ListClass => "Classes".to_string(),
            Screen::ListGroup => "Groups".to_string(),
            Screen::AssignClassToStudent { student_id } => {
                format!("Assign class to student {}", student_id)
            }
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Screen::AddStudent | Screen::AddClass | Screen::AssignClassToStudent { .. }
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Screen::ListStudent | Screen::ListClass | Screen::ListGroup)
    }
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddStudent,
    AddClass,
    ListStudents,
    ListClasses,
    ListGroups,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::AddStudent,
        MenuItem::AddClass,
        MenuItem::ListStudents,
        MenuItem::ListClasses,
        MenuItem::ListGroups,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::AddStudent => "Add student",
            MenuItem::AddClass => "Add class",
            MenuItem::ListStudents => "List students",
            MenuItem::ListClasses => "List classes",
            MenuItem::ListGroups => "List groups",
            MenuItem::Quit => "Quit",
        }
    }

    /// Screen this entry opens; `None` for Quit
    pub fn target(&self) -> Option<Screen> {
        match self {
            MenuItem::AddStudent => Some(Screen::AddStudent),
            MenuItem::AddClass => Some(Screen::AddClass),
            MenuItem::ListStudents => Some(Screen::ListStudent),
            MenuItem::ListClasses => Some(Screen::ListClass),
            MenuItem::ListGroups => Some(Screen::ListGroup),
            MenuItem::Quit => None,
        }
    }
}

/// Side effects requested by the reducer, executed by the run loop in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AddStudent {
        name: String,
        surname: String,
    },
    AddClass {
        year: String,
        modifier: String,
    },
    AssignClassToStudent {
        student_id: i64,
        year: String,
        modifier: String,
    },
    LoadStudents,
    LoadClasses,
    LoadGroups,
    /// End the application
    Quit,
}

impl Effect {
    /// Whether this effect modifies storage
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Effect::AddStudent { .. }
                | Effect::AddClass { .. }
                | Effect::AssignClassToStudent { .. }
        )
    }
}
