use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    All,
    /// Only tasks that are not completed
    Active,
    /// Only completed tasks
    #[serde(alias = "done")]
    Completed,
}

impl FilterCategory {
    /// All categories, in tab order
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::All,
        FilterCategory::Active,
        FilterCategory::Completed,
    ];

    /// The category value used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Active => "active",
            FilterCategory::Completed => "completed",
        }
    }

    /// Human-readable tab label
    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::All => "All",
            FilterCategory::Active => "Active",
            FilterCategory::Completed => "Completed",
        }
    }

    /// Whether a task with the given completion flag is visible under this category
    pub fn admits(self, completed: bool) -> bool {
        match self {
            FilterCategory::All => true,
            FilterCategory::Active => !completed,
            FilterCategory::Completed => completed,
        }
    }

    /// Next category in tab order (wrapping)
    pub fn next(self) -> Self {
        match self {
            FilterCategory::All => FilterCategory::Active,
            FilterCategory::Active => FilterCategory::Completed,
            FilterCategory::Completed => FilterCategory::All,
        }
    }

    /// Previous category in tab order (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FilterCategory::All => FilterCategory::Completed,
            FilterCategory::Active => FilterCategory::All,
            FilterCategory::Completed => FilterCategory::Active,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}' (expected all, active or completed)")]
pub struct FilterParseError(pub String);

impl FromStr for FilterCategory {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterCategory::All),
            "active" => Ok(FilterCategory::Active),
            "completed" | "done" => Ok(FilterCategory::Completed),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}

/// The single active filter for a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    current: FilterCategory,
}

impl FilterState {
    pub fn new(current: FilterCategory) -> Self {
        FilterState { current }
    }

    pub fn current(&self) -> FilterCategory {
        self.current
    }

    pub(crate) fn set(&mut self, category: FilterCategory) {
        self.current = category;
    }
}
