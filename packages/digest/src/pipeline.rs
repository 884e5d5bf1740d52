//! End-to-end digest collection: window → scan → aggregate.
//!
//! Strictly sequential, one window per invocation. Never fails: transport
//! trouble mid-scan yields a digest over the partial window, with the stop
//! reason logged loudly enough for an operator to tell the difference.

use chrono::{DateTime, Utc};

use crate::config::DigestConfig;
use crate::feed::EventFeed;
use crate::scanner::{scan_window, StopReason};
use crate::summary::{summarize, WeeklySummary};
use crate::window::TimeWindow;

/// Everything one digest run produced.
#[derive(Debug)]
pub struct WeeklyDigest {
    pub window: TimeWindow,
    pub summary: WeeklySummary,
    pub stop: StopReason,
    /// In-window events that fed the summary.
    pub events_scanned: usize,
    pub pages_fetched: u32,
}

/// Collect the digest for the week ending at `now`'s midnight.
pub async fn run(feed: &dyn EventFeed, config: &DigestConfig, now: DateTime<Utc>) -> WeeklyDigest {
    let window = TimeWindow::trailing_days(now, config.window_days);
    tracing::info!(
        org = %config.org,
        window_start = %window.start,
        window_end = %window.end,
        "Collecting weekly digest"
    );

    let scan = scan_window(
        feed,
        &config.org,
        &window,
        config.per_page,
        config.page_delay,
    )
    .await;

    match &scan.stop {
        StopReason::FetchFailed(e) => tracing::warn!(
            error = %e,
            pages_fetched = scan.pages_fetched,
            in_window = scan.events.len(),
            "Scan ended on a fetch failure; digest covers a partial window"
        ),
        StopReason::FeedDrained => tracing::info!(
            pages_fetched = scan.pages_fetched,
            in_window = scan.events.len(),
            "Feed drained before the window edge"
        ),
        StopReason::WindowExhausted => tracing::info!(
            pages_fetched = scan.pages_fetched,
            in_window = scan.events.len(),
            "Scanned the full window"
        ),
    }

    let summary = summarize(&scan.events);
    tracing::info!(?summary, "Weekly summary aggregated");

    WeeklyDigest {
        window,
        summary,
        stop: scan.stop,
        events_scanned: scan.events.len(),
        pages_fetched: scan.pages_fetched,
    }
}
