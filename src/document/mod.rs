//! Document model
//!
//! The persisted root document and the entities it owns. The document is
//! the sole owner of every entity collection; entities carry no
//! back-references.

mod models;
mod state;

pub use models::{
    CaffeineEntry, CreateNoteRequest, CreateSnippetRequest, CreateTaskRequest, Note, Priority,
    Session, Snippet, Task, TaskStatus,
};
pub use state::{AppDocument, BackgroundConfig, BackgroundKind, Theme, ToolsConfig};

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
