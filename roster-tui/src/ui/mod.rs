//! UI rendering
//!
//! Render functions turn state into frames and have no other effect.
//! Output is deliberately plain: borders, text and a `>` cursor marker.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, FormField, MenuItem, Screen};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", state.current_screen.title()))
        .borders(Borders::ALL);

    match state.current_screen {
        Screen::MainMenu => {
            frame.render_widget(Paragraph::new(main_menu_lines(state)).block(block), chunks[0])
        }
        Screen::AddStudent => {
            let form = &state.student_form;
            let fields = [
                ("First name", form.editor(FormField::First)),
                ("Last name", form.editor(FormField::Second)),
            ];
            render_form(frame, block, chunks[0], state, fields, form.focus);
        }
        Screen::AddClass | Screen::AssignClassToStudent { .. } => {
            let form = &state.class_form;
            let fields = [
                ("Year", form.editor(FormField::First)),
                ("Modifier", form.editor(FormField::Second)),
            ];
            render_form(frame, block, chunks[0], state, fields, form.focus);
        }
        Screen::ListStudent => {
            let rows = state.students.iter().map(|s| s.to_string()).collect();
            let lines = list_lines(state, "ID Surname Name", rows);
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
        }
        Screen::ListClass => {
            let rows = state.classes.iter().map(|c| c.to_string()).collect();
            let lines = list_lines(state, "ID Class", rows);
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
        }
        Screen::ListGroup => {
            let rows = state.groups.iter().map(|g| g.to_string()).collect();
            let lines = list_lines(state, "Name Surname Year Modifier", rows);
            frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
        }
    }

    frame.render_widget(Paragraph::new(hints(state.current_screen)), chunks[1]);

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "> "
    } else {
        "  "
    }
}

fn main_menu_lines(state: &AppState) -> Vec<Line<'static>> {
    MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(format!("{}{}. {}", marker(i == state.menu_cursor), i + 1, item.label()))
        })
        .collect()
}

/// Two bordered single-line editors and the save indicator
///
/// Only the focused editor shows a cursor.
fn render_form(
    frame: &mut Frame,
    block: Block,
    area: Rect,
    state: &AppState,
    fields: [(&str, TextArea<'static>); 2],
    focus: FormField,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, ((label, mut editor), field)) in fields
        .into_iter()
        .zip([FormField::First, FormField::Second])
        .enumerate()
    {
        editor.set_block(Block::default().title(format!(" {} ", label)).borders(Borders::ALL));
        editor.set_cursor_line_style(Style::default());
        if field != focus {
            editor.set_cursor_style(Style::default());
        } else {
            editor.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        }
        frame.render_widget(&editor, rows[i]);
    }

    let save = if state.can_save() { "[ Save ]" } else { "( save disabled )" };
    frame.render_widget(Paragraph::new(format!("  {}", save)), rows[2]);
}

fn list_lines(state: &AppState, header: &str, rows: Vec<String>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(format!("  {}", header))];

    if rows.is_empty() {
        lines.push(Line::from("  (empty)"));
        return lines;
    }

    lines.extend(
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| Line::from(format!("{}{}", marker(i == state.row_cursor), row))),
    );
    lines
}

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::MainMenu => " Up/Down: move | Enter: open | 1-6: shortcut | q: quit",
        Screen::ListGroup => " Up/Down: move | Enter: assign class | Esc: close",
        screen if screen.is_list() => " Up/Down: move | Esc: close",
        _ => " Tab: next field | Left/Right/Home/End: move | Enter/Ctrl+S: save | Esc: close",
    }
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let text = vec![
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().title(" Error ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
