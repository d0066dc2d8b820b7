use chrono::NaiveDate;

use crate::model::task::{DueLabel, Task, due_field_value};
use crate::util::line_input::LineInput;

/// Longest text a date field accepts (`YYYY-MM-DD`)
pub const DATE_FIELD_LEN: usize = 10;

/// Which field of a two-field editor has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Text,
    Date,
}

impl EditField {
    pub fn toggle(self) -> Self {
        match self {
            EditField::Text => EditField::Date,
            EditField::Date => EditField::Text,
        }
    }
}

/// The in-progress edit of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub text: LineInput,
    pub date: LineInput,
    pub focus: EditField,
}

impl EditDraft {
    /// A draft pre-filled with the task's current text and due date
    pub fn from_task(task: &Task) -> Self {
        EditDraft {
            text: LineInput::with_text(&task.text),
            date: LineInput::with_text(&due_field_value(task.due)).max_chars(DATE_FIELD_LEN),
            focus: EditField::Text,
        }
    }

    /// The field that has focus
    pub fn focused_mut(&mut self) -> &mut LineInput {
        match self.focus {
            EditField::Text => &mut self.text,
            EditField::Date => &mut self.date,
        }
    }
}

/// State of a task's edit control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Display,
    Editing(EditDraft),
}

impl EditState {
    /// Label of the edit control in this state
    pub fn control_label(&self) -> &'static str {
        match self {
            EditState::Display => "Edit",
            EditState::Editing(_) => "Save",
        }
    }
}

/// One rendered task: the task, its edit control, and whether the active
/// filter hides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    task: Task,
    edit: EditState,
    hidden: bool,
}

impl TaskView {
    pub fn new(task: Task) -> Self {
        TaskView {
            task,
            edit: EditState::Display,
            hidden: false,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn text(&self) -> &str {
        &self.task.text
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.task.due
    }

    /// The task's completion flag
    pub fn is_completed(&self) -> bool {
        self.task.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.task.completed = completed;
    }

    pub fn due_label(&self, today: NaiveDate) -> DueLabel {
        self.task.due_label(today)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn edit_state_mut(&mut self) -> &mut EditState {
        &mut self.edit
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing(_))
    }

    /// The open edit draft, if the task is being edited
    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.edit {
            EditState::Editing(draft) => Some(draft),
            EditState::Display => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match &mut self.edit {
            EditState::Editing(draft) => Some(draft),
            EditState::Display => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
