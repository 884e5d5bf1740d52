//! The trailing time window the digest reports on.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// A fixed trailing window, anchored at the most recent UTC midnight.
///
/// Mildly counter-intuitive ordering: `start` is the *newer* edge (the
/// midnight the window ends at) and `end` the older one, matching how the
/// reverse-chronological feed is walked from `start` back toward `end`.
/// Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The `days`-long window ending at midnight UTC of the day containing
    /// `now`. Total for any valid instant; calendar rollover is chrono's
    /// problem, not string formatting's.
    pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
        let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = start - Duration::days(days);
        Self { start, end }
    }

    /// The standard 7-day digest window.
    pub fn trailing_week(now: DateTime<Utc>) -> Self {
        Self::trailing_days(now, 7)
    }

    /// Whether an instant falls inside the window, edges included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.end <= instant && instant <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_start_is_midnight_of_today() {
        let window = TimeWindow::trailing_week(utc(2024, 3, 15, 17, 42, 9));
        assert_eq!(window.start, utc(2024, 3, 15, 0, 0, 0));
        assert_eq!(window.end, utc(2024, 3, 8, 0, 0, 0));
    }

    #[test]
    fn test_month_rollover() {
        let window = TimeWindow::trailing_week(utc(2024, 3, 4, 1, 0, 0));
        assert_eq!(window.end, utc(2024, 2, 26, 0, 0, 0));
    }

    #[test]
    fn test_year_rollover() {
        let window = TimeWindow::trailing_week(utc(2025, 1, 3, 8, 0, 0));
        assert_eq!(window.end, utc(2024, 12, 27, 0, 0, 0));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let window = TimeWindow::trailing_week(utc(2024, 3, 15, 12, 0, 0));
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.start + Duration::milliseconds(1)));
        assert!(!window.contains(window.end - Duration::milliseconds(1)));
    }

    #[test]
    fn test_midnight_invocation_is_its_own_start() {
        let midnight = utc(2024, 6, 1, 0, 0, 0);
        let window = TimeWindow::trailing_week(midnight);
        assert_eq!(window.start, midnight);
    }
}
