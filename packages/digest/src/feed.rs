//! Event feed trait for the paginated scan.
//!
//! The scanner only needs "give me page N of the org's events, newest
//! first"; this trait abstracts over the real GitHub client and the mock
//! used in tests. Pages are 1-indexed; ordering across pages is the feed's
//! guarantee, not checked here.

use async_trait::async_trait;
use github_events::{GithubClient, GithubError, OrgEvent};

use crate::error::FeedError;

/// A paginated, reverse-chronological source of org events.
#[async_trait]
pub trait EventFeed: Send + Sync {
    /// Fetch one page of events for `org`.
    async fn list_events(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> std::result::Result<Vec<OrgEvent>, FeedError>;
}

/// The real feed, backed by the GitHub REST client.
pub struct GithubEventFeed {
    client: GithubClient,
}

impl GithubEventFeed {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventFeed for GithubEventFeed {
    async fn list_events(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> std::result::Result<Vec<OrgEvent>, FeedError> {
        self.client
            .list_public_org_events(org, page, per_page)
            .await
            .map_err(|e| match e {
                GithubError::Api { status, message } => FeedError::Api { status, message },
                other => FeedError::Transport(Box::new(other)),
            })
    }
}

/// Mock feed for tests: a fixed page sequence, optionally failing at a
/// given page, with a request counter for fetch-bound assertions.
#[derive(Default)]
pub struct MockEventFeed {
    pages: Vec<Vec<OrgEvent>>,
    fail_at: Option<u32>,
    requests: std::sync::atomic::AtomicU32,
}

impl MockEventFeed {
    /// Create an empty mock feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of events.
    pub fn with_page(mut self, events: Vec<OrgEvent>) -> Self {
        self.pages.push(events);
        self
    }

    /// Make the given 1-indexed page fetch fail with a transport error.
    pub fn failing_at(mut self, page: u32) -> Self {
        self.fail_at = Some(page);
        self
    }

    /// How many page fetches have been attempted.
    pub fn pages_requested(&self) -> u32 {
        self.requests.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl EventFeed for MockEventFeed {
    async fn list_events(
        &self,
        _org: &str,
        page: u32,
        _per_page: u32,
    ) -> std::result::Result<Vec<OrgEvent>, FeedError> {
        self.requests
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if self.fail_at == Some(page) {
            return Err(FeedError::Transport(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "mock feed failure",
            ))));
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}
