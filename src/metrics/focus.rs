//! Focus analytics
//!
//! Calendar-day aggregations over the pomodoro session log: the rolling
//! 7-day velocity view and the 180-day heatmap. Sessions are attributed to
//! the calendar day of their completion timestamp, not to rolling 24-hour
//! windows. Pure functions of the log and a `now` timestamp.

use crate::config::{HEATMAP_BAND_BOUNDS_MINUTES, HEATMAP_WINDOW_DAYS, VELOCITY_WINDOW_DAYS};
use crate::document::Session;
use chrono::{DateTime, Datelike, Days, NaiveDate, Weekday};
use std::collections::HashMap;

/// One calendar day of the rolling velocity view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityBucket {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub minutes: u32,
}

/// One calendar day of the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub minutes: u32,
    /// Intensity band 0..=4; 0 is exactly "no focus minutes"
    pub band: u8,
}

/// Rolling 7-day focus velocity ending on `now`'s calendar day.
///
/// Always exactly 7 buckets, oldest first; days without sessions have zero
/// minutes. Sessions outside the window are dropped from this view.
pub fn weekly_velocity(sessions: &[Session], now_ms: i64) -> Vec<VelocityBucket> {
    day_window(sessions, now_ms, VELOCITY_WINDOW_DAYS)
        .into_iter()
        .map(|(date, minutes)| VelocityBucket {
            date,
            weekday: date.weekday(),
            minutes,
        })
        .collect()
}

/// 180-day heatmap ending on `now`'s calendar day.
///
/// Always exactly 180 cells, oldest first, each banded by its daily total.
pub fn heatmap(sessions: &[Session], now_ms: i64) -> Vec<HeatmapCell> {
    day_window(sessions, now_ms, HEATMAP_WINDOW_DAYS)
        .into_iter()
        .map(|(date, minutes)| HeatmapCell {
            date,
            minutes,
            band: intensity_band(minutes),
        })
        .collect()
}

/// Step intensity band for a daily minute total.
///
/// Zero is its own band; bands are monotonic in minutes.
pub fn intensity_band(minutes: u32) -> u8 {
    if minutes == 0 {
        return 0;
    }
    for (i, bound) in HEATMAP_BAND_BOUNDS_MINUTES.iter().enumerate() {
        if minutes < *bound {
            return (i + 1) as u8;
        }
    }
    (HEATMAP_BAND_BOUNDS_MINUTES.len() + 1) as u8
}

/// Lifetime focus minutes across the whole session log
pub fn total_focus_minutes(sessions: &[Session]) -> u64 {
    sessions
        .iter()
        .map(|session| u64::from(session.duration_minutes))
        .sum()
}

/// Per-day minute totals for the `days`-long window ending on `now`'s
/// calendar day, oldest first. Every day in the window is present.
fn day_window(sessions: &[Session], now_ms: i64, days: u64) -> Vec<(NaiveDate, u32)> {
    let today = day_of(now_ms);
    let start = today
        .checked_sub_days(Days::new(days - 1))
        .unwrap_or(today);

    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for session in sessions {
        let day = day_of(session.timestamp);
        if day >= start && day <= today {
            let total = per_day.entry(day).or_insert(0);
            *total = total.saturating_add(session.duration_minutes);
        }
    }

    start
        .iter_days()
        .take(days as usize)
        .map(|date| (date, per_day.get(&date).copied().unwrap_or(0)))
        .collect()
}

/// Calendar day (UTC) of an epoch-millisecond timestamp
fn day_of(ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn session(timestamp: i64, duration_minutes: u32) -> Session {
        Session {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            duration_minutes,
        }
    }

    /// Noon UTC on an arbitrary fixed day, so day arithmetic in tests
    /// cannot straddle a midnight boundary
    fn fixed_noon() -> i64 {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        noon.and_utc().timestamp_millis()
    }

    #[test]
    fn test_velocity_always_has_seven_buckets() {
        let now = fixed_noon();

        assert_eq!(weekly_velocity(&[], now).len(), 7);

        let one = vec![session(now, 25)];
        assert_eq!(weekly_velocity(&one, now).len(), 7);

        let many: Vec<Session> = (0..1000).map(|i| session(now - i * 1000, 1)).collect();
        assert_eq!(weekly_velocity(&many, now).len(), 7);
    }

    #[test]
    fn test_velocity_attributes_sessions_to_calendar_days() {
        let now = fixed_noon();
        let sessions = vec![
            session(now, 25),
            session(now - DAY_MS, 30),
            session(now - DAY_MS, 20),
        ];

        let buckets = weekly_velocity(&sessions, now);
        assert_eq!(buckets[6].minutes, 25);
        assert_eq!(buckets[5].minutes, 50);
        assert_eq!(buckets[4].minutes, 0);
    }

    #[test]
    fn test_velocity_drops_out_of_window_sessions() {
        let now = fixed_noon();
        let sessions = vec![session(now - 10 * DAY_MS, 25), session(now + DAY_MS, 25)];

        let buckets = weekly_velocity(&sessions, now);
        let total: u32 = buckets.iter().map(|b| b.minutes).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_velocity_buckets_end_on_todays_weekday() {
        let now = fixed_noon();
        let buckets = weekly_velocity(&[], now);

        // 2024-03-20 is a Wednesday
        assert_eq!(buckets[6].weekday, Weekday::Wed);
        assert_eq!(buckets[0].weekday, Weekday::Thu);
    }

    #[test]
    fn test_heatmap_always_has_180_cells() {
        let now = fixed_noon();
        assert_eq!(heatmap(&[], now).len(), 180);
        assert_eq!(heatmap(&[session(now, 25)], now).len(), 180);
    }

    #[test]
    fn test_heatmap_conserves_in_window_minutes() {
        let now = fixed_noon();
        let sessions = vec![
            session(now, 25),
            session(now - 100 * DAY_MS, 50),
            session(now - 179 * DAY_MS, 15),
            // Outside the window, must be excluded
            session(now - 181 * DAY_MS, 500),
        ];

        let cells = heatmap(&sessions, now);
        let total: u32 = cells.iter().map(|c| c.minutes).sum();
        assert_eq!(total, 90);
    }

    #[test]
    fn test_intensity_band_boundaries() {
        assert_eq!(intensity_band(0), 0);
        assert_eq!(intensity_band(1), 1);
        assert_eq!(intensity_band(24), 1);
        assert_eq!(intensity_band(25), 2);
        assert_eq!(intensity_band(59), 2);
        assert_eq!(intensity_band(60), 3);
        assert_eq!(intensity_band(119), 3);
        assert_eq!(intensity_band(120), 4);
        assert_eq!(intensity_band(10_000), 4);
    }

    #[test]
    fn test_intensity_band_is_monotonic() {
        let mut previous = 0;
        for minutes in 0..200 {
            let band = intensity_band(minutes);
            assert!(band >= previous);
            previous = band;
        }
    }

    #[test]
    fn test_total_focus_minutes() {
        let now = Utc::now().timestamp_millis();
        let sessions = vec![session(now, 25), session(now, 5), session(now, 15)];
        assert_eq!(total_focus_minutes(&sessions), 45);
    }
}
