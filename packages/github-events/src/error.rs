//! Error types for the GitHub events client.

use thiserror::Error;

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GithubError>;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// Network error (connection failed, timeout, bad TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API error (non-2xx response: rate limit, auth, missing org)
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },
}
