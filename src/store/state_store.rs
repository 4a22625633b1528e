//! State store
//!
//! Durable round-trip of the application document to and from the single
//! storage slot, plus file-based export and import. Loading never fails:
//! an absent or corrupt slot is the cold-start path and yields an
//! all-defaults document. Saving propagates storage-medium failures,
//! the one error callers must surface.

use crate::config;
use crate::document::{
    now_ms, AppDocument, BackgroundConfig, CaffeineEntry, Note, Session, Snippet, Task, Theme,
    ToolsConfig,
};
use crate::error::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// A caller-chosen subset of the document, used as the export payload and
/// as the result of an import. Absent keys are omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSlice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippets: Option<Vec<Snippet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pomodoro_sessions: Option<Vec<Session>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_log: Option<Vec<CaffeineEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_config: Option<BackgroundConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_config: Option<ToolsConfig>,
}

impl DocumentSlice {
    /// A slice covering the whole document
    pub fn full(doc: &AppDocument) -> Self {
        Self {
            tasks: Some(doc.tasks.clone()),
            notes: Some(doc.notes.clone()),
            snippets: Some(doc.snippets.clone()),
            pomodoro_sessions: Some(doc.pomodoro_sessions.clone()),
            caffeine_log: Some(doc.caffeine_log.clone()),
            theme: Some(doc.theme),
            background_config: Some(doc.background_config.clone()),
            tools_config: Some(doc.tools_config.clone()),
        }
    }
}

/// Result of parsing an import file: the recognized keys that decoded
/// cleanly, plus the keys that were present but skipped because their
/// value did not decode.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub slice: DocumentSlice,
    pub skipped_keys: Vec<String>,
}

/// Store owning the single persisted document slot
#[derive(Clone)]
pub struct StateStore {
    storage_path: PathBuf,
}

impl StateStore {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            storage_path: app_data_dir.join(config::STORAGE_FILE_NAME),
        }
    }

    /// Path of the storage slot
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Load the document from the storage slot.
    ///
    /// An absent or unparseable slot is not an error: it is logged and an
    /// all-defaults document is returned. Missing fields in a parseable
    /// document are filled by the schema defaults during decode.
    pub async fn load(&self) -> AppDocument {
        let raw = match fs::read_to_string(&self.storage_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No stored document at {:?}, cold start", self.storage_path);
                return AppDocument::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read stored document, using defaults: {}", e);
                return AppDocument::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Stored document is unparseable, using defaults: {}", e);
                AppDocument::default()
            }
        }
    }

    /// Serialize and overwrite the storage slot, stamping `lastSaved`.
    ///
    /// The write goes to a temp file first and is renamed into place so a
    /// crash mid-write cannot corrupt the slot. The stamp is rolled back
    /// when the write fails, so the in-memory document never claims a save
    /// that did not happen.
    pub async fn save(&self, doc: &mut AppDocument) -> Result<()> {
        let previous = doc.last_saved;
        doc.last_saved = now_ms();

        if let Err(e) = self.write_slot(doc).await {
            doc.last_saved = previous;
            return Err(e);
        }

        Ok(())
    }

    async fn write_slot(&self, doc: &AppDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc)?;

        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.storage_path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &self.storage_path).await?;

        tracing::debug!(
            "Saved document to {:?} ({} bytes)",
            self.storage_path,
            content.len()
        );

        Ok(())
    }

    /// Write a backup file named with the current date into `dir` and
    /// return its path
    pub async fn export_to_file(&self, slice: &DocumentSlice, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).await?;

        let date = Utc::now().format("%Y-%m-%d");
        let export_path = dir.join(format!("{}_{}.json", config::EXPORT_FILE_PREFIX, date));

        let content = serde_json::to_string_pretty(slice)?;
        fs::write(&export_path, content).await?;

        tracing::info!("Exported backup to {:?}", export_path);

        Ok(export_path)
    }

    /// Parse an import file.
    ///
    /// The file must be valid JSON; anything else is an `ImportParse`
    /// error. A bare top-level array is the earliest export format and is
    /// read as `tasks`. Recognized keys whose value does not decode (a
    /// malformed status, a non-array collection) are skipped with a
    /// warning rather than coerced; the caller merges only what decoded.
    pub async fn import_from_file(&self, path: &Path) -> Result<ImportOutcome> {
        let raw = fs::read_to_string(path).await?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| AppError::ImportParse(format!("not valid JSON: {e}")))?;

        match value {
            Value::Array(_) => {
                tracing::info!("Import file is a bare array, reading it as tasks");
                let mut outcome = ImportOutcome::default();
                match serde_json::from_value::<Vec<Task>>(value) {
                    Ok(tasks) => outcome.slice.tasks = Some(tasks),
                    Err(e) => {
                        tracing::warn!("Skipping legacy task array, does not decode: {}", e);
                        outcome.skipped_keys.push("tasks".to_string());
                    }
                }
                Ok(outcome)
            }
            Value::Object(map) => {
                let mut outcome = ImportOutcome::default();
                for (key, value) in map {
                    import_key(&mut outcome, &key, value);
                }
                Ok(outcome)
            }
            _ => Err(AppError::ImportParse(
                "expected a JSON object or array at the top level".to_string(),
            )),
        }
    }
}

/// Decode one recognized top-level key into the outcome. Unrecognized keys
/// are ignored; recognized keys with undecodable values are recorded as
/// skipped.
fn import_key(outcome: &mut ImportOutcome, key: &str, value: Value) {
    fn decode<T: serde::de::DeserializeOwned>(
        outcome: &mut ImportOutcome,
        key: &str,
        value: Value,
        slot: impl FnOnce(&mut DocumentSlice, T),
    ) {
        match serde_json::from_value(value) {
            Ok(decoded) => slot(&mut outcome.slice, decoded),
            Err(e) => {
                tracing::warn!("Skipping import key '{}', does not decode: {}", key, e);
                outcome.skipped_keys.push(key.to_string());
            }
        }
    }

    match key {
        "tasks" => decode(outcome, key, value, |s, v| s.tasks = Some(v)),
        "notes" => decode(outcome, key, value, |s, v| s.notes = Some(v)),
        "snippets" => decode(outcome, key, value, |s, v| s.snippets = Some(v)),
        "pomodoroSessions" => decode(outcome, key, value, |s, v| s.pomodoro_sessions = Some(v)),
        "caffeineLog" => decode(outcome, key, value, |s, v| s.caffeine_log = Some(v)),
        "theme" => decode(outcome, key, value, |s, v| s.theme = Some(v)),
        "backgroundConfig" => decode(outcome, key, value, |s, v| s.background_config = Some(v)),
        "toolsConfig" => decode(outcome, key, value, |s, v| s.tools_config = Some(v)),
        other => {
            tracing::debug!("Ignoring unrecognized import key '{}'", other);
        }
    }
}
