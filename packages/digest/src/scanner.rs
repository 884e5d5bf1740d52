//! Paginated scan of the event feed against a time window.
//!
//! Walks 1-indexed pages of a newest-first feed, keeping events inside
//! `[window.end, window.start]`. The feed's ordering lets the scan stop at
//! the first event older than the window's far edge: nothing after it can
//! be in-window. Each page folds to a tagged [`PageOutcome`] rather than a
//! mutable keep-going flag, so the stop reason stays explicit.
//!
//! The scan is fail-soft: a fetch error ends it with whatever was already
//! accumulated. Callers must look at [`StopReason`] to tell a real outage
//! from normal end-of-window termination.

use std::time::Duration;

use github_events::OrgEvent;

use crate::error::FeedError;
use crate::feed::EventFeed;
use crate::window::TimeWindow;

/// Why the scan stopped fetching pages.
#[derive(Debug)]
pub enum StopReason {
    /// Saw an event older than the window's far edge — the normal case.
    WindowExhausted,

    /// The feed ran out of events (short or empty page) before the window
    /// edge was reached.
    FeedDrained,

    /// A page fetch failed; the result covers only the pages before it.
    FetchFailed(FeedError),
}

impl StopReason {
    /// True only for [`StopReason::FetchFailed`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }
}

/// Result of one windowed scan.
#[derive(Debug)]
pub struct ScanResult {
    /// Every in-window event, in feed order (newest first).
    pub events: Vec<OrgEvent>,
    pub stop: StopReason,
    /// Pages fetched successfully.
    pub pages_fetched: u32,
}

/// Outcome of folding one page into the accumulator.
enum PageOutcome {
    Continue(u32),
    Stop(StopReason),
}

/// Scan the feed for every event inside `window`.
///
/// Each iteration sleeps `page_delay` before fetching — a fixed-rate
/// throttle for the rate-limited feed. Never returns an error; see
/// [`StopReason`].
pub async fn scan_window(
    feed: &dyn EventFeed,
    org: &str,
    window: &TimeWindow,
    per_page: u32,
    page_delay: Duration,
) -> ScanResult {
    let mut events = Vec::new();
    let mut pages_fetched = 0u32;
    let mut page = 1u32;

    loop {
        tokio::time::sleep(page_delay).await;

        let outcome = match feed.list_events(org, page, per_page).await {
            Ok(batch) => {
                pages_fetched += 1;
                fold_page(&batch, window, per_page, page, &mut events)
            }
            Err(e) => {
                tracing::warn!(org, page, error = %e, "Event page fetch failed, keeping partial scan");
                PageOutcome::Stop(StopReason::FetchFailed(e))
            }
        };

        match outcome {
            PageOutcome::Continue(next) => page = next,
            PageOutcome::Stop(stop) => {
                tracing::debug!(
                    org,
                    pages_fetched,
                    in_window = events.len(),
                    stop = ?stop,
                    "Event scan finished"
                );
                return ScanResult {
                    events,
                    stop,
                    pages_fetched,
                };
            }
        }
    }
}

fn fold_page(
    batch: &[OrgEvent],
    window: &TimeWindow,
    per_page: u32,
    page: u32,
    events: &mut Vec<OrgEvent>,
) -> PageOutcome {
    for event in batch {
        if window.contains(event.created_at) {
            events.push(event.clone());
        } else if event.created_at > window.start {
            // Newer than the window; same-day stragglers ahead of midnight.
            continue;
        } else {
            // Older than the far edge. Newest-first ordering means nothing
            // later in this page or any next page can be in-window.
            return PageOutcome::Stop(StopReason::WindowExhausted);
        }
    }

    if (batch.len() as u32) < per_page {
        PageOutcome::Stop(StopReason::FeedDrained)
    } else {
        PageOutcome::Continue(page + 1)
    }
}
