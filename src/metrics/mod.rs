//! Derived metrics
//!
//! Read-only analytics computed from the raw logs. Every function is
//! deterministic given the collections and a `now` timestamp, and is meant
//! to be recomputed on demand; results are never cached or persisted.

mod board;
mod caffeine;
mod focus;

pub use board::{status_distribution, StatusCount};
pub use caffeine::{active_caffeine, entry_contribution, peak_estimate, PeakEstimate};
pub use focus::{
    heatmap, intensity_band, total_focus_minutes, weekly_velocity, HeatmapCell, VelocityBucket,
};
