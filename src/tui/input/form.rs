use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{EditField, parse_due_date};
use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

use super::common::{edit_line, report_task_error};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Tab | KeyCode::BackTab => app.form.focus = app.form.focus.toggle(),
        KeyCode::Enter => submit_form(app),
        _ => {
            let date_field = app.form.focus == EditField::Date;
            edit_line(app.form.focused_mut(), key, date_field);
        }
    }
}

/// Create a task from the form. On success the fields are cleared; on
/// empty text they are left as typed and an alert is raised.
fn submit_form(app: &mut App) {
    let due = parse_due_date(app.form.date.text());
    match task_ops::add_task(&mut app.tasks, &app.filter, app.form.text.text(), due) {
        Ok(index) => {
            app.form.reset();
            app.move_cursor_to_task(index);
            app.status_message = Some("added".to_string());
        }
        Err(e) => report_task_error(app, e),
    }
}
