use crossterm::event::{KeyCode, KeyEvent};

use crate::model::EditField;
use crate::tui::app::{App, Mode};

use super::common::edit_line;
use super::navigate::activate_edit_current;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    let Some(index) = app.cursor_task_index() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        // Leave the draft open; Enter in navigate mode comes back to it
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => activate_edit_current(app),
        _ => {
            let Some(draft) = app.tasks.get_mut(index).and_then(|v| v.draft_mut()) else {
                app.mode = Mode::Navigate;
                return;
            };
            if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                draft.focus = draft.focus.toggle();
            } else {
                let date_field = draft.focus == EditField::Date;
                edit_line(draft.focused_mut(), key, date_field);
            }
        }
    }
}
