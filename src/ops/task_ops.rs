use chrono::NaiveDate;

use crate::model::filter::FilterState;
use crate::model::list::TaskList;
use crate::model::task::{Task, parse_due_date};
use crate::model::view::{EditDraft, EditState, TaskView};
use crate::ops::filter_ops::reapply_filter;

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text must not be empty")]
    EmptyTaskText,
    #[error("task index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("task {0} is not being edited")]
    NotEditing(usize),
}

/// What activating a task's edit control did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The task entered edit mode
    Started,
    /// The draft was saved and the task re-rendered
    Saved,
}

/// Build a view for one task. `text` must be non-empty; callers check.
pub fn render_task(text: &str, due: Option<NaiveDate>, completed: bool) -> TaskView {
    let mut task = Task::new(text, due);
    task.completed = completed;
    TaskView::new(task)
}

/// Add a new, not-completed task at the end of the list.
/// Returns the index of the new task.
pub fn add_task(
    list: &mut TaskList,
    filter: &FilterState,
    text: &str,
    due: Option<NaiveDate>,
) -> Result<usize, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        tracing::debug!("rejected task with empty text");
        return Err(TaskError::EmptyTaskText);
    }
    let index = list.push(render_task(text, due, false));
    reapply_filter(filter, list);
    tracing::info!(index, due = ?due, "task added");
    Ok(index)
}

/// Flip a task's completion flag. Returns the new flag.
pub fn toggle_task(
    list: &mut TaskList,
    filter: &FilterState,
    index: usize,
) -> Result<bool, TaskError> {
    let view = list
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange(index))?;
    let completed = !view.is_completed();
    view.set_completed(completed);
    reapply_filter(filter, list);
    tracing::info!(index, completed, "task toggled");
    Ok(completed)
}

/// Remove a task. No confirmation; the filter needs no re-evaluation.
pub fn delete_task(list: &mut TaskList, index: usize) -> Result<Task, TaskError> {
    if index >= list.len() {
        return Err(TaskError::IndexOutOfRange(index));
    }
    let view = list.remove(index);
    tracing::info!(index, "task deleted");
    Ok(view.task().clone())
}

/// Put a task into edit mode with a draft of its current text and due date.
/// A task already being edited keeps its draft.
pub fn begin_edit(list: &mut TaskList, index: usize) -> Result<(), TaskError> {
    let view = list
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange(index))?;
    if !view.is_editing() {
        let draft = EditDraft::from_task(view.task());
        *view.edit_state_mut() = EditState::Editing(draft);
        tracing::debug!(index, "edit started");
    }
    Ok(())
}

/// Save a task's draft.
///
/// Empty text leaves the task and its open draft untouched. Otherwise the
/// view is replaced, at the same position, by a freshly rendered one holding
/// the edited text and date and the task's current completion flag.
pub fn save_edit(
    list: &mut TaskList,
    filter: &FilterState,
    index: usize,
) -> Result<(), TaskError> {
    let view = list.get(index).ok_or(TaskError::IndexOutOfRange(index))?;
    let draft = view.draft().ok_or(TaskError::NotEditing(index))?;

    let text = draft.text.text().trim();
    if text.is_empty() {
        tracing::debug!(index, "rejected edit with empty text");
        return Err(TaskError::EmptyTaskText);
    }
    let due = parse_due_date(draft.date.text());
    let completed = view.is_completed();

    let updated = render_task(text, due, completed);
    list.replace(index, updated);
    reapply_filter(filter, list);
    tracing::info!(index, due = ?due, "task edited");
    Ok(())
}

/// Activate a task's edit control: start editing from display state, save
/// from editing state.
pub fn activate_edit(
    list: &mut TaskList,
    filter: &FilterState,
    index: usize,
) -> Result<EditOutcome, TaskError> {
    let view = list.get(index).ok_or(TaskError::IndexOutOfRange(index))?;
    match view.edit_state() {
        EditState::Display => {
            begin_edit(list, index)?;
            Ok(EditOutcome::Started)
        }
        EditState::Editing(_) => {
            save_edit(list, filter, index)?;
            Ok(EditOutcome::Saved)
        }
    }
}
