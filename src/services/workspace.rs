//! Workspace service
//!
//! Owns the live application document and funnels every mutation through
//! the state store's save path. The store is injected; nothing here is a
//! global. Mutations are sequential: each one completes (including its
//! save) before the next is processed.

use crate::collections;
use crate::config;
use crate::document::{
    now_ms, AppDocument, BackgroundConfig, CaffeineEntry, CreateNoteRequest, CreateSnippetRequest,
    CreateTaskRequest, Note, Priority, Session, Snippet, Task, TaskStatus, Theme,
};
use crate::error::{AppError, Result};
use crate::store::{DocumentSlice, StateStore};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Keys applied and skipped by an import merge
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub applied_keys: Vec<String>,
    pub skipped_keys: Vec<String>,
}

/// The owner of the live document
pub struct Workspace {
    store: StateStore,
    doc: AppDocument,
}

impl Workspace {
    /// Load the document from the injected store and take ownership of it
    pub async fn open(store: StateStore) -> Self {
        let doc = store.load().await;
        tracing::info!(
            "Workspace opened: {} tasks, {} notes, {} snippets",
            doc.tasks.len(),
            doc.notes.len(),
            doc.snippets.len()
        );
        Self { store, doc }
    }

    /// Read-only view of the live document
    pub fn document(&self) -> &AppDocument {
        &self.doc
    }

    async fn persist(&mut self) -> Result<()> {
        self.store.save(&mut self.doc).await
    }

    // ===== Tasks =====

    /// Create a task on the board; new tasks start in TODO at MEDIUM
    pub async fn add_task(&mut self, req: CreateTaskRequest) -> Result<Task> {
        let title = if req.title.trim().is_empty() {
            "Untitled".to_string()
        } else {
            req.title
        };

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description: req.description.unwrap_or_default(),
            status: TaskStatus::Todo,
            priority: req.priority.unwrap_or(Priority::Medium),
            created_at: now_ms(),
            tags: req.tags.unwrap_or_default(),
        };

        tracing::info!("Creating task: {}", task.id);
        self.doc.tasks.push(task.clone());
        self.persist().await?;
        Ok(task)
    }

    /// Replace a task in place by id. The task's position on the board is
    /// unchanged; a missing id is an error at this layer.
    pub async fn update_task(&mut self, task: Task) -> Result<Task> {
        if !collections::upsert_by_id(&mut self.doc.tasks, task.clone()) {
            return Err(AppError::TaskNotFound(task.id));
        }
        self.persist().await?;
        Ok(task)
    }

    /// Move a task to a board column. Any status may transition to any
    /// other, including DONE back to TODO.
    pub async fn set_task_status(&mut self, id: &str, status: TaskStatus) -> Result<Task> {
        let task = self
            .doc
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;

        if task.status == status {
            return Ok(task.clone());
        }

        task.status = status;
        let updated = task.clone();
        tracing::debug!("Task {} moved to {:?}", id, status);
        self.persist().await?;
        Ok(updated)
    }

    /// Advance a task's priority one step in the cycle; CRITICAL wraps to
    /// LOW
    pub async fn cycle_task_priority(&mut self, id: &str) -> Result<Priority> {
        let task = self
            .doc
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;

        task.priority = task.priority.next();
        let priority = task.priority;
        self.persist().await?;
        Ok(priority)
    }

    /// Delete a task by id; deleting an absent id is a no-op
    pub async fn delete_task(&mut self, id: &str) -> Result<()> {
        collections::remove_by_id(&mut self.doc.tasks, id);
        self.persist().await
    }

    // ===== Notes =====

    /// Create a note at the front of the list so the newest shows first
    pub async fn add_note(&mut self, req: CreateNoteRequest) -> Result<Note> {
        let color = req
            .color
            .unwrap_or_else(|| config::DEFAULT_NOTE_COLOR.to_string());
        if !AppDocument::is_known_note_color(&color) {
            tracing::warn!("Note color '{}' is not in the palette", color);
        }

        let note = Note {
            id: Uuid::new_v4().to_string(),
            content: req.content.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
            color,
            created_at: now_ms(),
        };

        collections::insert_front(&mut self.doc.notes, note.clone());
        self.persist().await?;
        Ok(note)
    }

    /// Replace a note in place by id, keeping its display position
    pub async fn update_note(&mut self, note: Note) -> Result<Note> {
        if !collections::upsert_by_id(&mut self.doc.notes, note.clone()) {
            return Err(AppError::NoteNotFound(note.id));
        }
        self.persist().await?;
        Ok(note)
    }

    /// Delete a note by id; deleting an absent id is a no-op
    pub async fn delete_note(&mut self, id: &str) -> Result<()> {
        collections::remove_by_id(&mut self.doc.notes, id);
        self.persist().await
    }

    /// Move a note between display positions.
    ///
    /// Indices are validated here, at the event boundary; the editor
    /// itself does not check bounds.
    pub async fn reorder_notes(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.doc.notes.len();
        for index in [from, to] {
            if index >= len {
                return Err(AppError::IndexOutOfBounds { index, len });
            }
        }

        collections::move_item(&mut self.doc.notes, from, to);
        self.persist().await
    }

    // ===== Snippets =====

    /// Save a snippet at the front of the vault
    pub async fn add_snippet(&mut self, req: CreateSnippetRequest) -> Result<Snippet> {
        let snippet = Snippet {
            id: Uuid::new_v4().to_string(),
            title: req.title.unwrap_or_else(|| "Untitled Snippet".to_string()),
            code: req.code.unwrap_or_default(),
            language: req.language.unwrap_or_else(|| "typescript".to_string()),
            tags: req.tags.unwrap_or_default(),
            created_at: now_ms(),
        };

        collections::insert_front(&mut self.doc.snippets, snippet.clone());
        self.persist().await?;
        Ok(snippet)
    }

    /// Replace a snippet in place by id, keeping its vault position
    pub async fn update_snippet(&mut self, snippet: Snippet) -> Result<Snippet> {
        if !collections::upsert_by_id(&mut self.doc.snippets, snippet.clone()) {
            return Err(AppError::SnippetNotFound(snippet.id));
        }
        self.persist().await?;
        Ok(snippet)
    }

    /// Delete a snippet by id; deleting an absent id is a no-op
    pub async fn delete_snippet(&mut self, id: &str) -> Result<()> {
        collections::remove_by_id(&mut self.doc.snippets, id);
        self.persist().await
    }

    // ===== Logs =====

    /// Append a completed pomodoro session to the log
    pub async fn complete_session(&mut self, duration_minutes: u32) -> Result<Session> {
        let session = Session {
            id: Uuid::new_v4().to_string(),
            timestamp: now_ms(),
            duration_minutes,
        };

        tracing::info!("Session completed: {} minutes", duration_minutes);
        self.doc.pomodoro_sessions.push(session.clone());
        self.persist().await?;
        Ok(session)
    }

    /// Append a caffeine dose to the log
    pub async fn log_caffeine(&mut self, amount_mg: f64) -> Result<CaffeineEntry> {
        let entry = CaffeineEntry {
            id: Uuid::new_v4().to_string(),
            amount: amount_mg,
            timestamp: now_ms(),
        };

        self.doc.caffeine_log.push(entry.clone());
        self.persist().await?;
        Ok(entry)
    }

    /// Bulk-clear the caffeine log
    pub async fn clear_caffeine_log(&mut self) -> Result<()> {
        self.doc.caffeine_log.clear();
        self.persist().await
    }

    // ===== Configuration =====

    pub async fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.doc.theme = theme;
        self.persist().await
    }

    pub async fn set_background_config(&mut self, background: BackgroundConfig) -> Result<()> {
        self.doc.background_config = background;
        self.persist().await
    }

    /// Flip the caffeine counter tool on or off, returning the new state
    pub async fn toggle_caffeine_counter(&mut self) -> Result<bool> {
        let enabled = !self.doc.tools_config.show_caffeine_counter;
        self.doc.tools_config.show_caffeine_counter = enabled;
        self.persist().await?;
        Ok(enabled)
    }

    // ===== Backup =====

    /// Export the whole document as a dated backup file in `dir`
    pub async fn export_backup(&self, dir: &Path) -> Result<PathBuf> {
        let slice = DocumentSlice::full(&self.doc);
        self.store.export_to_file(&slice, dir).await
    }

    /// Export a caller-chosen subset of the document
    pub async fn export_subset(&self, slice: &DocumentSlice, dir: &Path) -> Result<PathBuf> {
        self.store.export_to_file(slice, dir).await
    }

    /// Import a backup file and merge its recognized keys one at a time.
    ///
    /// A key present in the file replaces the matching collection; keys
    /// absent from the file leave the live document untouched, so a file
    /// containing only tasks never clears the notes. A parse failure
    /// propagates with nothing merged.
    pub async fn import_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let outcome = self.store.import_from_file(path).await?;

        let mut summary = ImportSummary {
            applied_keys: Vec::new(),
            skipped_keys: outcome.skipped_keys,
        };
        let slice = outcome.slice;

        if let Some(tasks) = slice.tasks {
            self.doc.tasks = tasks;
            summary.applied_keys.push("tasks".to_string());
        }
        if let Some(notes) = slice.notes {
            self.doc.notes = notes;
            summary.applied_keys.push("notes".to_string());
        }
        if let Some(snippets) = slice.snippets {
            self.doc.snippets = snippets;
            summary.applied_keys.push("snippets".to_string());
        }
        if let Some(sessions) = slice.pomodoro_sessions {
            self.doc.pomodoro_sessions = sessions;
            summary.applied_keys.push("pomodoroSessions".to_string());
        }
        if let Some(log) = slice.caffeine_log {
            self.doc.caffeine_log = log;
            summary.applied_keys.push("caffeineLog".to_string());
        }
        if let Some(theme) = slice.theme {
            self.doc.theme = theme;
            summary.applied_keys.push("theme".to_string());
        }
        if let Some(background) = slice.background_config {
            self.doc.background_config = background;
            summary.applied_keys.push("backgroundConfig".to_string());
        }
        if let Some(tools) = slice.tools_config {
            self.doc.tools_config = tools;
            summary.applied_keys.push("toolsConfig".to_string());
        }

        self.persist().await?;

        tracing::info!(
            "Import merged {} keys, skipped {}",
            summary.applied_keys.len(),
            summary.skipped_keys.len()
        );

        Ok(summary)
    }
}
