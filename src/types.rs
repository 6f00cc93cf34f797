// src/types.rs

use std::fmt;

use serde::Serialize;

/// Canonical subject identifier used throughout the planner.
pub type SubjectName = String;

/// Numeric mark recorded for a subject. No range is enforced.
pub type Score = i64;

/// Marks at or above this value count a subject as completed.
pub const COMPLETION_THRESHOLD: Score = 50;

/// Progress of a single subject, derived from study order and marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Completed,
    InProgress,
    Pending,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Completed => "Completed",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
