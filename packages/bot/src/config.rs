use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Bot configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub org: String,
    pub repo: String,
    pub github_token: Option<String>,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    /// Composited report image to attach, if a renderer has produced one.
    pub report_image: Option<PathBuf>,
    /// Six-field cron expression. Default: Monday midnight UTC.
    pub schedule: String,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            org: env::var("GITHUB_ORG").context("GITHUB_ORG must be set")?,
            repo: env::var("GITHUB_REPO").context("GITHUB_REPO must be set")?,
            github_token: env::var("GITHUB_TOKEN").ok(),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN must be set")?,
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
                .context("TELEGRAM_CHAT_ID must be set")?,
            report_image: env::var("REPORT_IMAGE_PATH").ok().map(PathBuf::from),
            schedule: env::var("DIGEST_SCHEDULE").unwrap_or_else(|_| "0 0 0 * * MON".to_string()),
        })
    }
}
