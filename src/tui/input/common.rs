use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterCategory;
use crate::ops::filter_ops;
use crate::ops::task_ops::TaskError;
use crate::tui::app::App;
use crate::util::line_input::LineInput;

/// Message shown when a task would be created or saved with empty text
pub(super) const EMPTY_TEXT_ALERT: &str = "Task text must not be empty!";

/// Apply a single-line editing key to `input`. Date fields only accept
/// digits and `-`. Returns false if the key is not an editing key.
pub(super) fn edit_line(input: &mut LineInput, key: KeyEvent, date_field: bool) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => input.move_home(),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => input.move_end(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.clear(),
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            input.delete_word_back()
        }
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if !date_field || c.is_ascii_digit() || c == '-' {
                input.insert(c);
            }
        }
        _ => return false,
    }
    true
}

/// Report a failed task operation to the user
pub(super) fn report_task_error(app: &mut App, err: TaskError) {
    match err {
        TaskError::EmptyTaskText => app.raise_alert(EMPTY_TEXT_ALERT),
        other => {
            tracing::warn!(error = %other, "task operation failed");
            app.status_message = Some(other.to_string());
        }
    }
}

/// Switch the active filter, keeping the cursor on the same task if it stays visible
pub(super) fn select_filter(app: &mut App, category: FilterCategory) {
    let current = app.cursor_task_index();
    filter_ops::apply_filter(&mut app.filter, category, &mut app.tasks);
    match current {
        Some(index) => app.move_cursor_to_task(index),
        None => app.clamp_cursor(),
    }
}

/// Move the cursor by `delta` over the visible tasks
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let count = app.visible_indices().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor as i64 + delta as i64;
    app.cursor = next.clamp(0, count as i64 - 1) as usize;
}

pub(super) fn jump_to_top(app: &mut App) {
    app.cursor = 0;
}

pub(super) fn jump_to_bottom(app: &mut App) {
    app.cursor = app.visible_indices().len().saturating_sub(1);
}
