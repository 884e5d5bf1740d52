//! Error types for the Telegram notifier.

use thiserror::Error;

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;

/// Telegram Bot API errors.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Network error (connection failed, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot API rejected the call (`ok: false` or non-2xx)
    #[error("Telegram API error: {0}")]
    Api(String),

    /// The photo file could not be read from disk
    #[error("failed to read photo file: {0}")]
    Io(#[from] std::io::Error),
}
