// Weekly digest bot entry point

mod config;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use digest::{DigestConfig, GithubEventFeed, NarrativeProvider, WhatTheDiffProvider};
use github_events::GithubClient;
use telegram::{TelegramOptions, TelegramService};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::BotConfig;

#[derive(Debug, Parser)]
#[command(name = "weekly-bot", about = "Posts a weekly org activity digest")]
struct Args {
    /// Run one digest pass immediately and exit instead of scheduling.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,digest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = BotConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(org = %config.org, "Configuration loaded");

    if args.once {
        return run_digest(&config).await;
    }

    start_scheduler(config).await
}

/// Schedule the weekly digest job and park until interrupted.
async fn start_scheduler(config: BotConfig) -> Result<()> {
    let scheduler = JobScheduler::new().await?;

    let schedule = config.schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let config = config.clone();
        Box::pin(async move {
            if let Err(e) = run_digest(&config).await {
                tracing::error!("Weekly digest run failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(%schedule, "Weekly digest scheduled");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    tracing::info!("Shutting down");
    Ok(())
}

/// One full digest pass: scan, aggregate, narrate, deliver.
async fn run_digest(config: &BotConfig) -> Result<()> {
    let client = match &config.github_token {
        Some(token) => GithubClient::with_token(token.clone()),
        None => GithubClient::new(),
    };
    let feed = GithubEventFeed::new(client);
    let digest_config = DigestConfig::new(&config.org, &config.repo);

    let weekly = digest::pipeline::run(&feed, &digest_config, Utc::now()).await;

    // The narrative is garnish: a failing analysis service must not block
    // the counters from going out.
    let narrative = match WhatTheDiffProvider::new()
        .narrative(&config.org, &config.repo)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Narrative fetch failed, sending counters only");
            String::new()
        }
    };

    let caption = digest::report::caption_block(&weekly.summary);
    let message = if narrative.is_empty() {
        caption
    } else {
        format!("{narrative}\n\n{caption}")
    };

    let notifier = TelegramService::new(TelegramOptions {
        bot_token: config.telegram_bot_token.clone(),
    });
    match config.report_image.as_deref().filter(|p| p.exists()) {
        Some(image) => notifier
            .send_photo(&config.telegram_chat_id, image, &message)
            .await
            .context("Failed to deliver digest photo to Telegram")?,
        None => notifier
            .send_message(&config.telegram_chat_id, &message)
            .await
            .context("Failed to deliver digest to Telegram")?,
    };

    tracing::info!(
        events = weekly.events_scanned,
        pages = weekly.pages_fetched,
        "Weekly digest delivered"
    );
    Ok(())
}
