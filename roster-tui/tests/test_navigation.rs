//! Test the screen transition table
//!
//! Every row of the navigation graph, plus the guarantees around
//! "close" and disabled "save".

use libroster::Group;
use roster_tui::app::{reduce, Action, AppState, Effect, MenuItem, Screen};

fn on(screen: Screen) -> AppState {
    AppState {
        current_screen: screen,
        ..AppState::new()
    }
}

fn groups(n: i64) -> Vec<Group> {
    (1..=n)
        .map(|id| Group {
            student_id: id,
            name: Some(format!("Name{}", id)),
            surname: Some("Surname".to_string()),
            year: None,
            modifier: None,
        })
        .collect()
}

#[test]
fn test_main_menu_entries() {
    let cases = [
        (MenuItem::AddStudent, Screen::AddStudent),
        (MenuItem::AddClass, Screen::AddClass),
        (MenuItem::ListStudents, Screen::ListStudent),
        (MenuItem::ListClasses, Screen::ListClass),
        (MenuItem::ListGroups, Screen::ListGroup),
    ];

    for (item, expected) in cases {
        let (state, effects) = reduce(AppState::new(), Action::Select(item));
        assert_eq!(state.current_screen, expected, "{:?}", item);
        assert!(effects.iter().all(|e| !e.is_write()));
    }
}

#[test]
fn test_close_returns_to_parent_without_writes() {
    let cases = [
        (Screen::AddStudent, Screen::MainMenu),
        (Screen::AddClass, Screen::MainMenu),
        (Screen::ListStudent, Screen::MainMenu),
        (Screen::ListClass, Screen::MainMenu),
        (Screen::ListGroup, Screen::MainMenu),
        (Screen::AssignClassToStudent { student_id: 3 }, Screen::ListGroup),
    ];

    for (from, to) in cases {
        let mut state = on(from);
        // Filled-in forms must not be saved by closing
        state.student_form.name = "Anna".to_string();
        state.student_form.surname = "Berzina".to_string();
        state.class_form.year = "10".to_string();
        state.class_form.modifier = "b".to_string();

        let (state, effects) = reduce(state, Action::Close);

        assert_eq!(state.current_screen, to, "close from {:?}", from);
        assert!(
            effects.iter().all(|e| !e.is_write()),
            "close from {:?} wrote: {:?}",
            from,
            effects
        );
    }
}

#[test]
fn test_close_on_main_menu_does_nothing() {
    let (state, effects) = reduce(AppState::new(), Action::Close);

    assert_eq!(state.current_screen, Screen::MainMenu);
    assert!(effects.is_empty());
}

#[test]
fn test_save_student_returns_to_main_menu() {
    let mut state = on(Screen::AddStudent);
    state.student_form.name = "  Anna ".to_string();
    state.student_form.surname = "Berzina".to_string();

    let (state, effects) = reduce(state, Action::Save);

    assert_eq!(state.current_screen, Screen::MainMenu);
    assert_eq!(
        effects,
        vec![Effect::AddStudent {
            name: "Anna".to_string(),
            surname: "Berzina".to_string()
        }]
    );
}

#[test]
fn test_save_class_returns_to_main_menu() {
    let mut state = on(Screen::AddClass);
    state.class_form.year = "9".to_string();
    state.class_form.modifier = "a".to_string();

    let (state, effects) = reduce(state, Action::Save);

    assert_eq!(state.current_screen, Screen::MainMenu);
    assert_eq!(
        effects,
        vec![Effect::AddClass {
            year: "9".to_string(),
            modifier: "a".to_string()
        }]
    );
}

#[test]
fn test_assign_on_row_targets_row_plus_one() {
    for row in 0..4 {
        let mut state = on(Screen::ListGroup);
        state.groups = groups(4);

        let (state, effects) = reduce(state, Action::Assign(row));

        assert_eq!(
            state.current_screen,
            Screen::AssignClassToStudent {
                student_id: row as i64 + 1
            }
        );
        assert!(effects.is_empty());
    }
}

#[test]
fn test_entering_a_form_starts_fresh() {
    let mut state = on(Screen::AddStudent);
    state.student_form.name = "Half".to_string();

    let (state, _) = reduce(state, Action::Close);
    let (state, _) = reduce(state, Action::Select(MenuItem::AddStudent));

    assert!(state.student_form.name.is_empty());
}

#[test]
fn test_forbidden_characters_keep_save_disabled() {
    let bad_names = ["Ann4", "Anna!", "Ann@", "An na", "Anna.", "Anna_", "#Anna", "Ann(a)"];
    for bad in bad_names {
        let mut state = on(Screen::AddStudent);
        state.student_form.name = bad.to_string();
        state.student_form.surname = "Berzina".to_string();

        let (state, effects) = reduce(state, Action::Save);
        assert_eq!(state.current_screen, Screen::AddStudent, "{:?}", bad);
        assert!(effects.is_empty(), "{:?} reached storage", bad);

        // And in the surname field
        let mut state = on(Screen::AddStudent);
        state.student_form.name = "Anna".to_string();
        state.student_form.surname = bad.to_string();
        assert!(reduce(state, Action::Save).1.is_empty());
    }

    let bad_classes = [
        ("1a", "b"),
        ("X", "b"),
        ("10!", "b"),
        ("10", "b1"),
        ("10", "b$"),
        ("", "b"),
        ("10", " "),
    ];
    for (year, modifier) in bad_classes {
        for screen in [Screen::AddClass, Screen::AssignClassToStudent { student_id: 1 }] {
            let mut state = on(screen);
            state.class_form.year = year.to_string();
            state.class_form.modifier = modifier.to_string();

            let (state, effects) = reduce(state, Action::Save);
            assert_eq!(state.current_screen, screen);
            assert!(effects.is_empty(), "{:?}/{:?} reached storage", year, modifier);
            assert!(state.error.is_none());
        }
    }
}
