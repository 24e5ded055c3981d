//! Test application initialization
//!
//! Verifies the state the application starts in.

use roster_tui::app::{AppState, FormField, Screen, UiConfig};

#[test]
fn test_app_initializes_to_main_menu() {
    let state = AppState::new();

    assert_eq!(state.current_screen, Screen::MainMenu);
    assert_eq!(state.menu_cursor, 0);
}

#[test]
fn test_no_error_on_boot() {
    let state = AppState::new();

    assert!(state.error.is_none());
}

#[test]
fn test_forms_start_empty_with_first_field_focused() {
    let state = AppState::new();

    assert!(state.student_form.name.is_empty());
    assert!(state.student_form.surname.is_empty());
    assert_eq!(state.student_form.focus, FormField::First);
    assert!(state.class_form.year.is_empty());
    assert_eq!(state.class_form.focus, FormField::First);
}

#[test]
fn test_no_data_loaded_on_boot() {
    let state = AppState::new();

    assert!(state.students.is_empty());
    assert!(state.classes.is_empty());
    assert!(state.groups.is_empty());
}

#[test]
fn test_tick_rate_from_config() {
    let state = AppState::with_config(UiConfig { tick_rate_ms: 40 });

    assert_eq!(state.config.tick_rate_ms, 40);
    assert_eq!(state.current_screen, Screen::MainMenu);
}
