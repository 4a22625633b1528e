//! Document entities
//!
//! Rust structs representing the entities stored in the persisted document.
//! Field names serialize in camelCase to stay wire-compatible with existing
//! exports; enum values serialize as their legacy string forms.

use serde::{Deserialize, Serialize};

use crate::collections::HasId;

/// Task lifecycle status. Any status may transition directly to any other;
/// there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    CodeReview,
    Done,
}

impl TaskStatus {
    /// Fixed display order of the board columns
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::CodeReview,
        TaskStatus::Done,
    ];
}

/// Task priority, cycled one step at a time: LOW → MEDIUM → HIGH →
/// CRITICAL → LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// The next priority in the cycle; CRITICAL wraps back to LOW
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Critical,
            Priority::Critical => Priority::Low,
        }
    }
}

/// A board task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
    pub tags: Vec<String>,
}

/// A sticky note. List position is the display order and is reorderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Palette key; unknown keys render as `neutral`
    pub color: String,
    pub created_at: i64,
}

/// A saved code snippet, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub created_at: i64,
}

/// A completed pomodoro session. Append-only; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// Completion time in epoch milliseconds
    pub timestamp: i64,
    pub duration_minutes: u32,
}

/// A logged caffeine dose. Append-only; the log can be bulk-cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaffeineEntry {
    pub id: String,
    /// Dose in milligrams
    pub amount: f64,
    pub timestamp: i64,
}

impl HasId for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Snippet {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Session {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for CaffeineEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create task request; unset fields take board defaults
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
}

/// Create note request
#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub color: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Create snippet request
#[derive(Debug, Default, Deserialize)]
pub struct CreateSnippetRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_cycle_wraps() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Critical);
        assert_eq!(Priority::Critical.next(), Priority::Low);
    }

    #[test]
    fn test_status_serializes_as_legacy_strings() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""IN_PROGRESS""#);

        let status: TaskStatus = serde_json::from_str(r#""CODE_REVIEW""#).unwrap();
        assert_eq!(status, TaskStatus::CodeReview);
    }

    #[test]
    fn test_task_serializes_in_camel_case() {
        let task = Task {
            id: "t1".to_string(),
            title: "Ship it".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            created_at: 1_700_000_000_000,
            tags: vec![],
        };

        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_unknown_status_is_a_decode_error() {
        let result = serde_json::from_str::<TaskStatus>(r#""SHIPPED""#);
        assert!(result.is_err());
    }
}
