//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! Each form screen owns its own form struct; entering the screen starts
//! from an empty form.

use libroster::validation::{validate_class, validate_student, ValidationResponse};
use libroster::{Class, Group, Student};
use tui_textarea::{CursorMove, TextArea};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,

    /// Highlighted main menu entry
    pub menu_cursor: usize,

    /// Highlighted row on list screens
    pub row_cursor: usize,

    /// Add student form
    pub student_form: StudentForm,

    /// Add class / assign class form
    pub class_form: ClassForm,

    /// Last loaded table contents
    pub students: Vec<Student>,
    pub classes: Vec<Class>,
    pub groups: Vec<Group>,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Which field of a two-field form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    First,
    Second,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::First => FormField::Second,
            FormField::Second => FormField::First,
        }
    }
}

/// Add student form
///
/// `name` and `surname` hold the field values that validation and storage
/// see. Each field is edited through its own `TextArea`, which keeps the
/// cursor position.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub surname: String,
    pub focus: FormField,
    editors: [TextArea<'static>; 2],
}

impl StudentForm {
    pub fn validation(&self) -> ValidationResponse {
        validate_student(&self.name, &self.surname)
    }

    /// Apply `edit` to the focused field
    pub fn edit(&mut self, edit: impl FnOnce(&mut TextArea<'static>)) {
        let [name_editor, surname_editor] = &mut self.editors;
        match self.focus {
            FormField::First => edit_field(name_editor, &mut self.name, edit),
            FormField::Second => edit_field(surname_editor, &mut self.surname, edit),
        }
    }

    /// Editor showing the current value of `field`
    pub fn editor(&self, field: FormField) -> TextArea<'static> {
        match field {
            FormField::First => synced(&self.editors[0], &self.name),
            FormField::Second => synced(&self.editors[1], &self.surname),
        }
    }
}

/// Class form, shared by "add class" and "assign class to student"
#[derive(Debug, Clone, Default)]
pub struct ClassForm {
    pub year: String,
    pub modifier: String,
    pub focus: FormField,
    editors: [TextArea<'static>; 2],
}

impl ClassForm {
    pub fn validation(&self) -> ValidationResponse {
        validate_class(&self.year, &self.modifier)
    }

    /// Apply `edit` to the focused field
    pub fn edit(&mut self, edit: impl FnOnce(&mut TextArea<'static>)) {
        let [year_editor, modifier_editor] = &mut self.editors;
        match self.focus {
            FormField::First => edit_field(year_editor, &mut self.year, edit),
            FormField::Second => edit_field(modifier_editor, &mut self.modifier, edit),
        }
    }

    /// Editor showing the current value of `field`
    pub fn editor(&self, field: FormField) -> TextArea<'static> {
        match field {
            FormField::First => synced(&self.editors[0], &self.year),
            FormField::Second => synced(&self.editors[1], &self.modifier),
        }
    }
}

fn text_of(editor: &TextArea<'_>) -> String {
    editor.lines().concat()
}

/// Single-line editor holding `value`, cursor at the end
fn single_line(value: &str) -> TextArea<'static> {
    let mut editor = TextArea::from([value.to_string()]);
    editor.move_cursor(CursorMove::End);
    editor
}

fn synced(editor: &TextArea<'static>, value: &str) -> TextArea<'static> {
    if text_of(editor) == value {
        editor.clone()
    } else {
        single_line(value)
    }
}

/// Run `edit` on `editor` and copy the result back into `value`
///
/// Fields are single-line: anything that splits the text into several
/// lines is joined back into one.
fn edit_field(
    editor: &mut TextArea<'static>,
    value: &mut String,
    edit: impl FnOnce(&mut TextArea<'static>),
) {
    if text_of(editor) != *value {
        *editor = single_line(value);
    }

    edit(editor);

    *value = text_of(editor);
    if editor.lines().len() > 1 {
        *editor = single_line(value);
    }
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl From<&libroster::config::UiConfig> for UiConfig {
    fn from(config: &libroster::config::UiConfig) -> Self {
        Self {
            tick_rate_ms: config.tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::MainMenu,
            menu_cursor: 0,
            row_cursor: 0,
            student_form: StudentForm::default(),
            class_form: ClassForm::default(),
            students: Vec::new(),
            classes: Vec::new(),
            groups: Vec::new(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Validation of the form on the current screen, if it is a form screen
    pub fn form_validation(&self) -> Option<ValidationResponse> {
        match self.current_screen {
            Screen::AddStudent => Some(self.student_form.validation()),
            Screen::AddClass | Screen::AssignClassToStudent { .. } => {
                Some(self.class_form.validation())
            }
            _ => None,
        }
    }

    /// Whether the "Save" button is enabled
    pub fn can_save(&self) -> bool {
        self.form_validation().is_some_and(|v| v.valid)
    }

    /// Number of rows on the current list screen
    pub fn row_count(&self) -> usize {
        match self.current_screen {
            Screen::ListStudent => self.students.len(),
            Screen::ListClass => self.classes.len(),
            Screen::ListGroup => self.groups.len(),
            _ => 0,
        }
    }
}
