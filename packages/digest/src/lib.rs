//! Weekly org activity digest.
//!
//! Walks one trailing week of an organization's public event feed, selects
//! the in-window events, classifies them into counters, and assembles the
//! material a report renderer and notifier need.
//!
//! # Example
//!
//! ```rust,ignore
//! use digest::{DigestConfig, GithubEventFeed};
//! use github_events::GithubClient;
//!
//! let feed = GithubEventFeed::new(GithubClient::new());
//! let config = DigestConfig::new("some-org", "main-repo");
//!
//! let weekly = digest::pipeline::run(&feed, &config, chrono::Utc::now()).await;
//! println!("{} commits this week", weekly.summary.commits);
//! ```
//!
//! The scan is fail-soft end to end: fetch failures and malformed payloads
//! cost coverage, never the whole report.

pub mod config;
pub mod error;
pub mod feed;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod summary;
pub mod window;

pub use config::DigestConfig;
pub use error::{DigestError, FeedError, Result};
pub use feed::{EventFeed, GithubEventFeed, MockEventFeed};
pub use narrative::{MockNarrativeProvider, NarrativeProvider, WhatTheDiffProvider};
pub use pipeline::{run, WeeklyDigest};
pub use report::{ReportArtifacts, ReportRenderer};
pub use scanner::{scan_window, ScanResult, StopReason};
pub use summary::{summarize, WeeklySummary};
pub use window::TimeWindow;
