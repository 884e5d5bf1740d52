//! Configuration for the digest pipeline.
//!
//! Everything the scan needs is passed explicitly here; there is no ambient
//! bot context to reach into.

use std::time::Duration;

/// Configuration for one digest run.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Organization whose public event feed is scanned.
    pub org: String,

    /// Repository named in the narrative request (`org/repo`).
    pub repo: String,

    /// Events per feed page. Default: 30 (the feed's own default).
    pub per_page: u32,

    /// Pause before each page fetch. This is a politeness throttle for the
    /// rate-limited feed, not an implementation accident. Default: 1s.
    pub page_delay: Duration,

    /// Length of the trailing window in days. Default: 7.
    pub window_days: i64,
}

impl DigestConfig {
    /// Create a config for an org/repo pair with default pagination knobs.
    pub fn new(org: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            per_page: 30,
            page_delay: Duration::from_secs(1),
            window_days: 7,
        }
    }

    /// Set the feed page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the inter-request pacing delay.
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Set the window length in days.
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DigestConfig::new("acme", "widgets");
        assert_eq!(config.per_page, 30);
        assert_eq!(config.page_delay, Duration::from_secs(1));
        assert_eq!(config.window_days, 7);
    }

    #[test]
    fn test_builders() {
        let config = DigestConfig::new("acme", "widgets")
            .with_per_page(100)
            .with_page_delay(Duration::ZERO)
            .with_window_days(14);
        assert_eq!(config.per_page, 100);
        assert_eq!(config.page_delay, Duration::ZERO);
        assert_eq!(config.window_days, 14);
    }
}
