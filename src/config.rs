//! Application configuration constants
//!
//! Central location for all configuration constants, model parameters,
//! and fixed tables used throughout the core.

// ===== Persistence =====

/// File name of the single persisted document slot
pub const STORAGE_FILE_NAME: &str = "night_shift_db.json";

/// Prefix for exported backup files; the current date is appended
pub const EXPORT_FILE_PREFIX: &str = "night_shift_backup";

// ===== Caffeine Model =====

/// Caffeine elimination half-life in milliseconds (5 hours).
/// Each logged dose's remaining effect halves over this interval.
pub const CAFFEINE_HALF_LIFE_MS: i64 = 5 * 60 * 60 * 1000;

/// Offset from the most recent dose to its peak effect (45 minutes)
pub const CAFFEINE_PEAK_OFFSET_MS: i64 = 45 * 60 * 1000;

// ===== Focus Analytics =====

/// Number of calendar-day buckets in the rolling velocity view
pub const VELOCITY_WINDOW_DAYS: u64 = 7;

/// Number of calendar-day buckets in the heatmap view
pub const HEATMAP_WINDOW_DAYS: u64 = 180;

/// Upper bounds (exclusive) for heatmap intensity bands 1..=3, in minutes.
/// Zero minutes is always band 0; totals at or above the last bound are band 4.
pub const HEATMAP_BAND_BOUNDS_MINUTES: [u32; 3] = [25, 60, 120];

// ===== Focus Timer Presets =====

/// Deep focus session length in minutes
pub const FOCUS_MINUTES: u32 = 25;

/// Short break length in minutes
pub const SHORT_BREAK_MINUTES: u32 = 5;

/// Long break length in minutes
pub const LONG_BREAK_MINUTES: u32 = 15;

// ===== Note Palette =====

/// Valid note color keys; unknown keys render as `neutral`
pub const NOTE_COLORS: &[&str] = &["neutral", "red", "blue", "green", "yellow", "purple"];

/// Default color key for new notes
pub const DEFAULT_NOTE_COLOR: &str = "neutral";
