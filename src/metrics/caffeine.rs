//! Caffeine decay model
//!
//! A fixed-half-life elimination model over the caffeine log. Each dose
//! decays exponentially; the active total is the sum of all decayed
//! contributions. Pure functions of the log and a `now` timestamp.

use crate::config::{CAFFEINE_HALF_LIFE_MS, CAFFEINE_PEAK_OFFSET_MS};
use crate::document::CaffeineEntry;

/// The estimated peak-effect instant relative to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakEstimate {
    /// Peak is still ahead, at this epoch-millisecond instant
    At(i64),
    /// The peak instant has already passed
    PastPeak,
}

/// Remaining contribution of a single dose at `now_ms`.
///
/// Future-dated entries (clock skew) contribute the full undecayed amount;
/// decay never applies retroactively.
pub fn entry_contribution(entry: &CaffeineEntry, now_ms: i64) -> f64 {
    let elapsed = now_ms - entry.timestamp;
    if elapsed < 0 {
        return entry.amount;
    }
    entry.amount * 0.5_f64.powf(elapsed as f64 / CAFFEINE_HALF_LIFE_MS as f64)
}

/// Total active caffeine in milligrams at `now_ms`
pub fn active_caffeine(log: &[CaffeineEntry], now_ms: i64) -> f64 {
    log.iter()
        .map(|entry| entry_contribution(entry, now_ms))
        .sum()
}

/// Peak-effect estimate from the most recently logged dose.
///
/// Only the entry with the latest timestamp matters, regardless of
/// insertion order. An empty log produces no estimate.
pub fn peak_estimate(log: &[CaffeineEntry], now_ms: i64) -> Option<PeakEstimate> {
    let last = log.iter().max_by_key(|entry| entry.timestamp)?;
    let peak_at = last.timestamp + CAFFEINE_PEAK_OFFSET_MS;

    if now_ms > peak_at {
        Some(PeakEstimate::PastPeak)
    } else {
        Some(PeakEstimate::At(peak_at))
    }
}
