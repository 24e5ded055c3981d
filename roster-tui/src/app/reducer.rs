//! Pure reducer function for state transitions
//!
//! `(State, Action) -> (State, Effects)`
//!
//! The reducer never touches storage or the terminal. Anything that must
//! happen outside is returned as an [`Effect`] for the run loop to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::{Action, Effect, MenuItem, Screen};
use super::state::{AppState, ClassForm, StudentForm};
use tui_textarea::TextArea;

/// Pure reducer function
///
/// Takes current state and an action, returns the new state together with
/// the side effects to run, in order.
pub fn reduce(state: AppState, action: Action) -> (AppState, Vec<Effect>) {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => (state, Vec::new()),
        Action::Resize(_, _) => (state, Vec::new()),

        // === Navigation ===
        Action::Select(item) if state.current_screen == Screen::MainMenu => {
            match item.target() {
                Some(screen) => navigate(state, screen),
                None => (state, vec![Effect::Quit]),
            }
        }
        Action::Select(_) => (state, Vec::new()),

        Action::Close => match state.current_screen {
            Screen::MainMenu => (state, Vec::new()),
            screen => navigate(state, screen.parent()),
        },

        Action::Save => save(state),

        Action::Assign(row) => {
            if state.current_screen == Screen::ListGroup && row < state.groups.len() {
                // Rows are 1:1 with student ids in insertion order
                let student_id = row as i64 + 1;
                navigate(state, Screen::AssignClassToStudent { student_id })
            } else {
                (state, Vec::new())
            }
        }

        Action::CursorUp => (move_cursor(state, -1), Vec::new()),
        Action::CursorDown => (move_cursor(state, 1), Vec::new()),

        Action::Activate => match state.current_screen {
            Screen::MainMenu => {
                let item = MenuItem::ALL[state.menu_cursor.min(MenuItem::ALL.len() - 1)];
                reduce(state, Action::Select(item))
            }
            Screen::ListGroup => {
                let row = state.row_cursor;
                reduce(state, Action::Assign(row))
            }
            screen if screen.is_form() => reduce(state, Action::Save),
            _ => (state, Vec::new()),
        },

        // === Form editing ===
        Action::Input(c) => (edit_focused(state, |editor| editor.insert_char(c)), Vec::new()),
        Action::Backspace => (
            edit_focused(state, |editor| {
                editor.delete_char();
            }),
            Vec::new(),
        ),
        Action::Edit(key) => (
            edit_focused(state, |editor| {
                editor.input(key);
            }),
            Vec::new(),
        ),
        Action::FocusNext => {
            let mut state = state;
            match state.current_screen {
                Screen::AddStudent => state.student_form.focus = state.student_form.focus.next(),
                Screen::AddClass | Screen::AssignClassToStudent { .. } => {
                    state.class_form.focus = state.class_form.focus.next()
                }
                _ => {}
            }
            (state, Vec::new())
        }

        // === Data ===
        Action::StudentsLoaded(students) => (
            clamp_rows(AppState { students, ..state }),
            Vec::new(),
        ),
        Action::ClassesLoaded(classes) => (
            clamp_rows(AppState { classes, ..state }),
            Vec::new(),
        ),
        Action::GroupsLoaded(groups) => (
            clamp_rows(AppState { groups, ..state }),
            Vec::new(),
        ),

        // === Error Handling ===
        Action::ShowError(error) => (
            AppState {
                error: Some(error),
                ..state
            },
            Vec::new(),
        ),
        Action::DismissError => (AppState { error: None, ..state }, Vec::new()),
    }
}

/// Enter `screen` with fresh form state, loading list data where needed
fn navigate(state: AppState, screen: Screen) -> (AppState, Vec<Effect>) {
    let effects = match screen {
        Screen::ListStudent => vec![Effect::LoadStudents],
        Screen::ListClass => vec![Effect::LoadClasses],
        Screen::ListGroup => vec![Effect::LoadGroups],
        _ => Vec::new(),
    };

    let state = AppState {
        current_screen: screen,
        row_cursor: 0,
        student_form: StudentForm::default(),
        class_form: ClassForm::default(),
        ..state
    };

    (state, effects)
}

/// Save the current form if it validates; otherwise nothing happens
fn save(state: AppState) -> (AppState, Vec<Effect>) {
    if !state.can_save() {
        return (state, Vec::new());
    }

    let write = match state.current_screen {
        Screen::AddStudent => Effect::AddStudent {
            name: state.student_form.name.trim().to_string(),
            surname: state.student_form.surname.trim().to_string(),
        },
        Screen::AddClass => Effect::AddClass {
            year: state.class_form.year.trim().to_string(),
            modifier: state.class_form.modifier.trim().to_string(),
        },
        Screen::AssignClassToStudent { student_id } => Effect::AssignClassToStudent {
            student_id,
            year: state.class_form.year.trim().to_string(),
            modifier: state.class_form.modifier.trim().to_string(),
        },
        _ => return (state, Vec::new()),
    };

    let parent = state.current_screen.parent();
    let (state, follow_up) = navigate(state, parent);

    let mut effects = vec![write];
    effects.extend(follow_up);
    (state, effects)
}

fn edit_focused(mut state: AppState, edit: impl FnOnce(&mut TextArea<'static>)) -> AppState {
    match state.current_screen {
        Screen::AddStudent => state.student_form.edit(edit),
        Screen::AddClass | Screen::AssignClassToStudent { .. } => state.class_form.edit(edit),
        _ => {}
    }
    state
}

fn move_cursor(mut state: AppState, delta: isize) -> AppState {
    let (cursor, len) = match state.current_screen {
        Screen::MainMenu => (&mut state.menu_cursor, MenuItem::ALL.len()),
        screen if screen.is_list() => {
            let len = state.row_count();
            (&mut state.row_cursor, len)
        }
        _ => return state,
    };

    if len > 0 {
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }
    state
}

fn clamp_rows(mut state: AppState) -> AppState {
    let len = state.row_count();
    state.row_cursor = state.row_cursor.min(len.saturating_sub(1));
    state
}

/// Handle keyboard input
///
/// Maps keys to semantic actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> (AppState, Vec<Effect>) {
    if key.kind == KeyEventKind::Release {
        return (state, Vec::new());
    }

    // Ctrl+C leaves from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return (state, vec![Effect::Quit]);
    }

    // The error overlay is modal
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => reduce(state, Action::DismissError),
            _ => (state, Vec::new()),
        };
    }

    let action = match state.current_screen {
        Screen::MainMenu => main_menu_key(key),
        screen if screen.is_form() => form_key(key),
        _ => list_key(key),
    };

    match action {
        Some(action) => reduce(state, action),
        None => (state, Vec::new()),
    }
}

fn main_menu_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('q') => Some(Action::Select(MenuItem::Quit)),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(Action::Select(MenuItem::ALL[index]))
        }
        _ => None,
    }
}

fn form_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(Action::Close),
        (KeyCode::Enter, _) => Some(Action::Save),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::Save),
        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
            Some(Action::FocusNext)
        }
        (KeyCode::Backspace, _) => Some(Action::Backspace),
        (KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End | KeyCode::Delete, _) => {
            Some(Action::Edit(key))
        }
        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::Input(c))
        }
        _ => None,
    }
}

fn list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Close),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter | KeyCode::Char('a') => Some(Action::Activate),
        _ => None,
    }
}
