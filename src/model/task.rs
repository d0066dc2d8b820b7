use chrono::NaiveDate;

/// Label shown in place of a due date when a task has none
pub const NO_DATE_LABEL: &str = "No Date";

/// A to-do item: its text, optional due date, and completion flag.
///
/// `completed` is the single source of truth for completion; the checkbox,
/// the strikethrough styling and the filter all read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task text (non-empty, already trimmed by the caller)
    pub text: String,
    /// Optional due date
    pub due: Option<NaiveDate>,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(text: impl Into<String>, due: Option<NaiveDate>) -> Self {
        Task {
            text: text.into(),
            due,
            completed: false,
        }
    }

    /// True if the task has a due date strictly before `today` and is not done
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due.is_some_and(|due| due < today)
    }

    /// The due-date label and the emphasis it should be drawn with
    pub fn due_label(&self, today: NaiveDate) -> DueLabel {
        let emphasis = if self.completed {
            DueEmphasis::Faded
        } else if self.is_overdue(today) {
            DueEmphasis::Overdue
        } else {
            DueEmphasis::Normal
        };
        DueLabel {
            text: format_due_date(self.due),
            emphasis,
        }
    }
}

/// How a due-date label is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueEmphasis {
    Normal,
    /// Due strictly before today and not completed
    Overdue,
    /// Task is completed
    Faded,
}

/// A formatted due-date label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueLabel {
    pub text: String,
    pub emphasis: DueEmphasis,
}

/// Format a due date in long form ("19 September 2025"), or the
/// [`NO_DATE_LABEL`] placeholder when absent.
pub fn format_due_date(due: Option<NaiveDate>) -> String {
    match due {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => NO_DATE_LABEL.to_string(),
    }
}

/// Format a due date the way date fields hold it (`YYYY-MM-DD`, empty when absent)
pub fn due_field_value(due: Option<NaiveDate>) -> String {
    due.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the contents of a date field. Empty or unparseable text means "no date".
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
