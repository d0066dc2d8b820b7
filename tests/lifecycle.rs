//! End-to-end task lifecycle through the library API: add, filter, toggle,
//! edit and delete, checking what each view would show.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;

use ticklist::model::{Config, DueEmphasis, FilterCategory, FilterState, TaskList};
use ticklist::ops::filter_ops::apply_filter;
use ticklist::ops::task_ops::{self, EditOutcome, TaskError};
use ticklist::tui::app::App;
use ticklist::tui::render;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn visible_texts(list: &TaskList) -> Vec<&str> {
    list.iter()
        .filter(|v| !v.is_hidden())
        .map(|v| v.text())
        .collect()
}

/// Draw the whole screen and report whether the first list row's text
/// cell is struck through.
fn first_row_struck_through(app: &mut App) -> bool {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|frame| render::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer();
    // tab bar (2 rows) + add form (3 rows), then " [x] " before the text
    let cell = &buf[(5, 5)];
    assert_eq!(cell.symbol(), "B");
    cell.modifier.contains(Modifier::CROSSED_OUT)
}

#[test]
fn overdue_task_through_complete_filter_and_delete() {
    let today = date(2025, 9, 19);
    let yesterday = date(2025, 9, 18);
    let mut app = App::new(&Config::default(), None);
    app.today = today;

    let index =
        task_ops::add_task(&mut app.tasks, &app.filter, "Buy milk", Some(yesterday)).unwrap();
    let view = app.tasks.get(index).unwrap();
    assert_eq!(view.due_label(today).text, "18 September 2025");
    assert_eq!(view.due_label(today).emphasis, DueEmphasis::Overdue);
    assert!(!first_row_struck_through(&mut app));

    task_ops::toggle_task(&mut app.tasks, &app.filter, index).unwrap();
    let view = app.tasks.get(index).unwrap();
    assert!(view.is_completed());
    assert_eq!(view.due_label(today).emphasis, DueEmphasis::Faded);
    assert!(first_row_struck_through(&mut app));

    apply_filter(&mut app.filter, FilterCategory::Active, &mut app.tasks);
    assert!(app.tasks.get(index).unwrap().is_hidden());
    assert!(visible_texts(&app.tasks).is_empty());

    apply_filter(&mut app.filter, FilterCategory::Completed, &mut app.tasks);
    assert!(!app.tasks.get(index).unwrap().is_hidden());
    assert_eq!(visible_texts(&app.tasks), vec!["Buy milk"]);

    let removed = task_ops::delete_task(&mut app.tasks, index).unwrap();
    assert_eq!(removed.text, "Buy milk");
    assert!(app.tasks.is_empty());
    assert!(app.tasks.iter().all(|v| v.text() != "Buy milk"));
}

#[test]
fn add_with_date_then_complete_under_active_filter() {
    let today = date(2025, 9, 19);
    let mut list = TaskList::new();
    let mut filter = FilterState::default();

    let index = task_ops::add_task(&mut list, &filter, "Buy milk", Some(date(2025, 9, 20))).unwrap();
    let label = list.get(index).unwrap().due_label(today);
    assert_eq!(label.text, "20 September 2025");
    assert_eq!(label.emphasis, DueEmphasis::Normal);

    apply_filter(&mut filter, FilterCategory::Active, &mut list);
    assert_eq!(visible_texts(&list), vec!["Buy milk"]);

    task_ops::toggle_task(&mut list, &filter, index).unwrap();
    assert!(list.get(index).unwrap().is_completed());
    assert!(visible_texts(&list).is_empty());

    apply_filter(&mut filter, FilterCategory::Completed, &mut list);
    assert_eq!(visible_texts(&list), vec!["Buy milk"]);
}

#[test]
fn edit_round_trip_keeps_position_and_completion() {
    let today = date(2025, 9, 19);
    let mut list = TaskList::new();
    let filter = FilterState::default();
    task_ops::add_task(&mut list, &filter, "first", None).unwrap();
    let index = task_ops::add_task(&mut list, &filter, "Call Bob", None).unwrap();
    task_ops::add_task(&mut list, &filter, "last", None).unwrap();
    task_ops::toggle_task(&mut list, &filter, index).unwrap();

    assert_eq!(list.get(index).unwrap().due_label(today).text, "No Date");

    let outcome = task_ops::activate_edit(&mut list, &filter, index).unwrap();
    assert_eq!(outcome, EditOutcome::Started);
    assert_eq!(list.get(index).unwrap().edit_state().control_label(), "Save");

    {
        let draft = list.get_mut(index).unwrap().draft_mut().unwrap();
        draft.text.clear();
        for c in "Call Alice".chars() {
            draft.text.insert(c);
        }
        for c in "2025-01-01".chars() {
            draft.date.insert(c);
        }
    }

    let outcome = task_ops::activate_edit(&mut list, &filter, index).unwrap();
    assert_eq!(outcome, EditOutcome::Saved);

    let view = list.get(index).unwrap();
    assert_eq!(view.text(), "Call Alice");
    assert_eq!(view.due(), Some(date(2025, 1, 1)));
    assert!(view.is_completed());
    assert!(!view.is_editing());
    assert_eq!(view.edit_state().control_label(), "Edit");

    // Completed tasks are never overdue, however old the date
    assert_eq!(view.due_label(today).emphasis, DueEmphasis::Faded);

    let texts: Vec<&str> = list.iter().map(|v| v.text()).collect();
    assert_eq!(texts, vec!["first", "Call Alice", "last"]);
}

#[test]
fn blank_text_is_rejected_everywhere() {
    let mut list = TaskList::new();
    let filter = FilterState::default();

    assert_eq!(
        task_ops::add_task(&mut list, &filter, "   ", None),
        Err(TaskError::EmptyTaskText)
    );
    assert!(list.is_empty());

    let index = task_ops::add_task(&mut list, &filter, "keep me", None).unwrap();
    task_ops::begin_edit(&mut list, index).unwrap();
    list.get_mut(index).unwrap().draft_mut().unwrap().text.clear();

    assert_eq!(
        task_ops::save_edit(&mut list, &filter, index),
        Err(TaskError::EmptyTaskText)
    );
    let view = list.get(index).unwrap();
    assert_eq!(view.text(), "keep me");
    assert!(view.is_editing());
}

#[test]
fn overdue_until_completed() {
    let today = date(2025, 9, 19);
    let mut list = TaskList::new();
    let filter = FilterState::default();
    let index = task_ops::add_task(&mut list, &filter, "late", Some(date(2025, 9, 18))).unwrap();

    assert_eq!(list.get(index).unwrap().due_label(today).emphasis, DueEmphasis::Overdue);
    task_ops::toggle_task(&mut list, &filter, index).unwrap();
    assert_eq!(list.get(index).unwrap().due_label(today).emphasis, DueEmphasis::Faded);
    task_ops::toggle_task(&mut list, &filter, index).unwrap();
    assert_eq!(list.get(index).unwrap().due_label(today).emphasis, DueEmphasis::Overdue);
}

#[test]
fn delete_removes_only_that_task() {
    let mut list = TaskList::new();
    let mut filter = FilterState::default();
    for text in ["a", "b", "c"] {
        task_ops::add_task(&mut list, &filter, text, None).unwrap();
    }
    apply_filter(&mut filter, FilterCategory::Active, &mut list);

    let removed = task_ops::delete_task(&mut list, 1).unwrap();
    assert_eq!(removed.text, "b");
    assert_eq!(visible_texts(&list), vec!["a", "c"]);
    assert_eq!(
        task_ops::delete_task(&mut list, 5),
        Err(TaskError::IndexOutOfRange(5))
    );
}
