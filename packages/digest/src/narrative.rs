//! Narrative summary provider for the report's prose pane.
//!
//! The counters tell what happened; an external analysis service tells the
//! story. This trait abstracts over that service so the pipeline and tests
//! never touch the network. Failures here are the caller's problem to
//! degrade on — the digest itself does not retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{DigestError, Result};

/// Source of a free-text weekly narrative for a repository.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Fetch a narrative blurb for `org/repo`.
    async fn narrative(&self, org: &str, repo: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest {
    repository: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    review: String,
}

/// What-the-diff backed provider.
pub struct WhatTheDiffProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl WhatTheDiffProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: "https://app.whatthediff.ai/api/analyze".to_string(),
        }
    }

    /// Override the analyze endpoint (tests, staging).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for WhatTheDiffProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NarrativeProvider for WhatTheDiffProvider {
    async fn narrative(&self, org: &str, repo: &str) -> Result<String> {
        let request = AnalyzeRequest {
            repository: format!("{org}/{repo}"),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DigestError::Narrative(Box::new(e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DigestError::Narrative(Box::new(std::io::Error::other(
                format!("analyze endpoint returned {status}"),
            ))));
        }

        let body: AnalyzeResponse = resp
            .json()
            .await
            .map_err(|e| DigestError::Narrative(Box::new(e)))?;

        // The review text arrives with hard newlines that break the
        // single-div rendering pane; flatten them.
        Ok(body.review.replace('\n', ""))
    }
}

/// Mock provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockNarrativeProvider {
    text: String,
}

impl MockNarrativeProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl NarrativeProvider for MockNarrativeProvider {
    async fn narrative(&self, _org: &str, _repo: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_returns_fixed_text() {
        let provider = MockNarrativeProvider::new("A quiet week.");
        let text = provider.narrative("acme", "widgets").await.unwrap();
        assert_eq!(text, "A quiet week.");
    }

    #[test]
    fn test_analyze_request_wire_shape() {
        let request = AnalyzeRequest {
            repository: "acme/widgets".into(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"repository":"acme/widgets"}"#
        );
    }
}
