use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{EditField, FilterCategory};
use crate::ops::task_ops::{self, EditOutcome};
use crate::tui::app::{App, Mode};

use super::common::{
    jump_to_bottom, jump_to_top, move_cursor, report_task_error, select_filter,
};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => jump_to_top(app),
        (_, KeyCode::Char('G') | KeyCode::End) => jump_to_bottom(app),

        // Add form
        (KeyModifiers::NONE, KeyCode::Char('a' | 'i')) => {
            app.form.focus = EditField::Text;
            app.mode = Mode::Form;
        }

        // Task affordances
        (KeyModifiers::NONE, KeyCode::Char(' ' | 'x')) => toggle_current(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) => activate_edit_current(app),
        (KeyModifiers::NONE, KeyCode::Enter) => resume_edit_current(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => delete_current(app),

        // Filters
        (KeyModifiers::NONE, KeyCode::Char('1')) => select_filter(app, FilterCategory::All),
        (KeyModifiers::NONE, KeyCode::Char('2')) => select_filter(app, FilterCategory::Active),
        (KeyModifiers::NONE, KeyCode::Char('3')) => {
            select_filter(app, FilterCategory::Completed)
        }
        (KeyModifiers::NONE, KeyCode::Char('f') | KeyCode::Tab) => {
            let next = app.filter.current().next();
            select_filter(app, next);
        }
        (_, KeyCode::Char('F') | KeyCode::BackTab) => {
            let prev = app.filter.current().prev();
            select_filter(app, prev);
        }
        _ => {}
    }
}

fn toggle_current(app: &mut App) {
    let Some(index) = app.cursor_task_index() else {
        return;
    };
    match task_ops::toggle_task(&mut app.tasks, &app.filter, index) {
        Ok(_) => app.clamp_cursor(),
        Err(e) => report_task_error(app, e),
    }
}

/// Activate the edit control of the task under the cursor: start editing
/// (and type into the draft), or save an open draft.
pub(super) fn activate_edit_current(app: &mut App) {
    let Some(index) = app.cursor_task_index() else {
        return;
    };
    match task_ops::activate_edit(&mut app.tasks, &app.filter, index) {
        Ok(EditOutcome::Started) => app.mode = Mode::Edit,
        Ok(EditOutcome::Saved) => {
            app.mode = Mode::Navigate;
            app.move_cursor_to_task(index);
            app.status_message = Some("saved".to_string());
        }
        Err(e) => report_task_error(app, e),
    }
}

/// Go back to typing into an open draft
fn resume_edit_current(app: &mut App) {
    if let Some(index) = app.cursor_task_index()
        && app.tasks.get(index).is_some_and(|v| v.is_editing())
    {
        app.mode = Mode::Edit;
    }
}

fn delete_current(app: &mut App) {
    let Some(index) = app.cursor_task_index() else {
        return;
    };
    match task_ops::delete_task(&mut app.tasks, index) {
        Ok(task) => {
            app.clamp_cursor();
            app.status_message = Some(format!("deleted \"{}\"", task.text));
        }
        Err(e) => report_task_error(app, e),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::*;
    use crate::model::Config;
    use crate::tui::input::test_keys::*;

    fn app_with_tasks(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default(), None);
        for text in texts {
            task_ops::add_task(&mut app.tasks, &app.filter, text, None).unwrap();
        }
        app
    }

    #[test]
    fn toggle_marks_cursor_task() {
        let mut app = app_with_tasks(&["a", "b"]);
        press_char(&mut app, 'j');
        press_char(&mut app, ' ');
        assert!(!app.tasks.get(0).unwrap().is_completed());
        assert!(app.tasks.get(1).unwrap().is_completed());
        press_char(&mut app, 'x');
        assert!(!app.tasks.get(1).unwrap().is_completed());
    }

    #[test]
    fn toggle_under_active_filter_hides_and_clamps() {
        let mut app = app_with_tasks(&["a", "b"]);
        press_char(&mut app, '2');
        press_char(&mut app, 'G');
        assert_eq!(app.cursor, 1);
        press_char(&mut app, ' ');
        assert!(app.tasks.get(1).unwrap().is_hidden());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_task_index(), Some(0));
    }

    #[test]
    fn filter_keys_select_category() {
        let mut app = app_with_tasks(&["a"]);
        press_char(&mut app, '3');
        assert_eq!(app.filter.current(), FilterCategory::Completed);
        assert_eq!(app.cursor_task_index(), None);
        press_char(&mut app, 'f');
        assert_eq!(app.filter.current(), FilterCategory::All);
        press_char(&mut app, 'F');
        assert_eq!(app.filter.current(), FilterCategory::Completed);
        press_char(&mut app, '1');
        assert_eq!(app.cursor_task_index(), Some(0));
    }

    #[test]
    fn delete_removes_cursor_task() {
        let mut app = app_with_tasks(&["a", "b", "c"]);
        press_char(&mut app, 'G');
        press_char(&mut app, 'd');
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.status_message.as_deref(), Some("deleted \"c\""));
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Delete);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn edit_key_enters_edit_mode() {
        let mut app = app_with_tasks(&["a"]);
        press_char(&mut app, 'e');
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.tasks.get(0).unwrap().is_editing());
    }

    #[test]
    fn enter_resumes_open_draft_only() {
        let mut app = app_with_tasks(&["a", "b"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);

        press_char(&mut app, 'e');
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
    }

    #[test]
    fn a_focuses_form() {
        let mut app = app_with_tasks(&[]);
        press_char(&mut app, 'a');
        assert_eq!(app.mode, Mode::Form);
    }

    #[test]
    fn keys_on_empty_list_are_harmless() {
        let mut app = app_with_tasks(&[]);
        for c in ['j', 'k', 'g', 'G', ' ', 'e', 'd'] {
            press_char(&mut app, c);
        }
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
