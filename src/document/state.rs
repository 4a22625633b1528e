//! The persisted application document
//!
//! `AppDocument` is the single root state object. Every field carries a
//! serde default so that documents written by an older schema version load
//! under a newer one with the gaps filled in, never with an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config;
use crate::document::models::{CaffeineEntry, Note, Session, Snippet, Task};

/// Color theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    NightShift,
    Cyberpunk,
    Dracula,
    Amber,
    Paper,
    Lofi,
}

/// Background media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundKind {
    #[default]
    Image,
    Video,
}

/// Dashboard background configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "type")]
    pub kind: BackgroundKind,
    #[serde(default = "default_background_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default = "default_true")]
    pub show_radial_gradient: bool,
}

fn default_background_opacity() -> f64 {
    0.3
}

fn default_true() -> bool {
    true
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            kind: BackgroundKind::Image,
            opacity: default_background_opacity(),
            blur: 0.0,
            show_radial_gradient: true,
        }
    }
}

/// Optional tool toggles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsConfig {
    #[serde(default)]
    pub show_caffeine_counter: bool,
}

/// The single persisted root state object.
///
/// Unknown top-level fields are captured into `extra` and written back on
/// save, so a document touched by a newer schema round-trips without loss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppDocument {
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub snippets: Vec<Snippet>,
    pub pomodoro_sessions: Vec<Session>,
    pub caffeine_log: Vec<CaffeineEntry>,
    pub theme: Theme,
    pub background_config: BackgroundConfig,
    pub tools_config: ToolsConfig,
    /// Epoch milliseconds of the last successful save
    pub last_saved: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppDocument {
    /// Whether a color key is part of the fixed note palette
    pub fn is_known_note_color(color: &str) -> bool {
        config::NOTE_COLORS.contains(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_loads_all_defaults() {
        let doc: AppDocument = serde_json::from_str("{}").unwrap();

        assert!(doc.tasks.is_empty());
        assert!(doc.notes.is_empty());
        assert!(doc.snippets.is_empty());
        assert!(doc.pomodoro_sessions.is_empty());
        assert!(doc.caffeine_log.is_empty());
        assert_eq!(doc.theme, Theme::NightShift);
        assert_eq!(doc.background_config, BackgroundConfig::default());
        assert!(!doc.tools_config.show_caffeine_counter);
        assert_eq!(doc.last_saved, 0);
    }

    #[test]
    fn test_pre_feature_document_gains_tools_config_default() {
        // Simulates a save from before the caffeine counter existed
        let raw = r#"{"tasks":[],"notes":[],"theme":"dracula","lastSaved":1700000000000}"#;
        let doc: AppDocument = serde_json::from_str(raw).unwrap();

        assert!(!doc.tools_config.show_caffeine_counter);
        assert_eq!(doc.theme, Theme::Dracula);
        assert_eq!(doc.last_saved, 1_700_000_000_000);
    }

    #[test]
    fn test_background_config_partial_fill() {
        let raw = r#"{"backgroundConfig":{"url":"wall.png"}}"#;
        let doc: AppDocument = serde_json::from_str(raw).unwrap();

        assert_eq!(doc.background_config.url, "wall.png");
        assert_eq!(doc.background_config.kind, BackgroundKind::Image);
        assert!((doc.background_config.opacity - 0.3).abs() < f64::EPSILON);
        assert!(doc.background_config.show_radial_gradient);
    }

    #[test]
    fn test_unknown_top_level_fields_round_trip() {
        let raw = r#"{"theme":"lofi","futureFeature":{"enabled":true}}"#;
        let doc: AppDocument = serde_json::from_str(raw).unwrap();
        assert!(doc.extra.contains_key("futureFeature"));

        let written = serde_json::to_value(&doc).unwrap();
        assert_eq!(written["futureFeature"]["enabled"], true);
    }

    #[test]
    fn test_note_color_palette_membership() {
        assert!(AppDocument::is_known_note_color("neutral"));
        assert!(AppDocument::is_known_note_color("purple"));
        assert!(!AppDocument::is_known_note_color("octarine"));
    }
}
