//! Typed errors for the digest library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on what went wrong. Note that pagination and classification themselves
//! never surface errors: they degrade to partial results by design, and
//! these types cover the collaborator boundaries (feed transport, narrative
//! service, rendering).

use thiserror::Error;

/// Errors from the digest's external collaborators.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Event feed transport or API failure
    #[error("event feed error: {0}")]
    Feed(#[from] FeedError),

    /// Narrative analysis service unavailable or returned garbage
    #[error("narrative service error: {0}")]
    Narrative(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTML-to-image rendering failed
    #[error("render error: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Errors from one page fetch against the event feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network-level failure (connection, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The feed answered with a non-success status
    #[error("feed API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, DigestError>;
