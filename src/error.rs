//! Error types for the Night Shift core
//!
//! All errors use thiserror for structured error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Import parse error: {0}")]
    ImportParse(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;
