//! Pure GitHub REST API client for the public org event feed.
//!
//! A minimal client for `GET /orgs/{org}/events`. Pages are 1-indexed and
//! returned newest-first by the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_events::GithubClient;
//!
//! let client = GithubClient::new();
//!
//! let events = client.list_public_org_events("some-org", 1, 30).await?;
//! for event in &events {
//!     println!("{} {}", event.created_at, event.kind);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{GithubError, Result};
pub use types::{EventPayload, Issue, IssuesPayload, Label, OrgEvent, PullRequest, PushPayload};

use reqwest::header;

const BASE_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "weekly-digest-bot";

pub struct GithubClient {
    client: reqwest::Client,
    token: Option<String>,
}

impl GithubClient {
    /// Unauthenticated client. Fine for public feeds, at a lower rate limit.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Client authenticating with a personal access or installation token.
    pub fn with_token(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: Some(token),
        }
    }

    /// Fetch one page of an organization's public event feed.
    pub async fn list_public_org_events(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<OrgEvent>> {
        let url = format!("{}/orgs/{}/events", BASE_URL, org);
        let mut req = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/vnd.github+json")
            .query(&[("page", page), ("per_page", per_page)]);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let events: Vec<OrgEvent> = resp.json().await?;
        tracing::debug!(org, page, count = events.len(), "Fetched org event page");
        Ok(events)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
