//! Classification and aggregation of in-window events.
//!
//! A single pure pass over the scanned list. Every counter the pass
//! computes is exposed on [`WeeklySummary`]; the report layer decides what
//! to render. Malformed payloads cost exactly the one event they arrived
//! on: the pass logs and moves on.

use github_events::{EventPayload, OrgEvent};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("static digit regex");
}

/// Label names carrying a bounty amount contain this token.
const BOUNTY_TOKEN: &str = "Price";

/// Counters for one week of org activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub commits: u64,
    pub opened_issues: u64,
    pub closed_issues: u64,
    pub comments: u64,
    pub bounties_usd: u64,
    pub opened_prs: u64,
    pub closed_prs: u64,
    pub merged_prs: u64,
}

/// Aggregate a list of in-window events into a [`WeeklySummary`].
///
/// Pure and idempotent: no state survives between calls.
pub fn summarize(events: &[OrgEvent]) -> WeeklySummary {
    let mut summary = WeeklySummary::default();

    for event in events {
        let payload = match event.decode_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    id = %event.id,
                    kind = %event.kind,
                    error = %e,
                    "Skipping event with malformed payload"
                );
                continue;
            }
        };

        match payload {
            EventPayload::Issues(p) => match p.action.as_str() {
                "opened" => summary.opened_issues += 1,
                "closed" => {
                    summary.closed_issues += 1;
                    if let Some(issue) = &p.issue {
                        for label in &issue.labels {
                            summary.bounties_usd += bounty_in_label(&label.name);
                        }
                    }
                }
                _ => {}
            },
            EventPayload::IssueComment(p) => {
                if p.action == "created" {
                    summary.comments += 1;
                }
            }
            EventPayload::PullRequest(p) => match p.action.as_str() {
                "opened" => summary.opened_prs += 1,
                "closed" => match p.pull_request {
                    Some(pr) if pr.merged => {
                        summary.merged_prs += 1;
                        // Commits land as the PR's own total, not enumerated.
                        summary.commits += pr.commits;
                    }
                    Some(_) => summary.closed_prs += 1,
                    None => {
                        tracing::warn!(id = %event.id, "PullRequestEvent without pull_request field");
                    }
                },
                _ => {}
            },
            EventPayload::Push(p) => summary.commits += p.commits.len() as u64,
            EventPayload::Other => {}
        }
    }

    summary
}

/// Bounty contributed by one label name.
///
/// Labels without the bounty token contribute nothing. A token-bearing
/// label with no digit run is malformed input: worth a warning, never a
/// crash, and contributes zero.
fn bounty_in_label(name: &str) -> u64 {
    if !name.contains(BOUNTY_TOKEN) {
        return 0;
    }
    match DIGIT_RUN.find(name).and_then(|m| m.as_str().parse().ok()) {
        Some(amount) => amount,
        None => {
            tracing::warn!(label = name, "Bounty label has no parseable amount");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(kind: &str, payload: serde_json::Value) -> OrgEvent {
        OrgEvent {
            id: "1".into(),
            kind: kind.into(),
            created_at: Utc::now(),
            payload,
        }
    }

    fn closed_issue_with_labels(labels: &[&str]) -> OrgEvent {
        let labels: Vec<_> = labels
            .iter()
            .map(|name| serde_json::json!({ "name": name }))
            .collect();
        event(
            "IssuesEvent",
            serde_json::json!({
                "action": "closed",
                "issue": { "number": 1, "labels": labels }
            }),
        )
    }

    #[test]
    fn test_end_to_end_counts() {
        let events = vec![
            event(
                "IssuesEvent",
                serde_json::json!({ "action": "opened", "issue": { "number": 9, "labels": [] } }),
            ),
            event(
                "PullRequestEvent",
                serde_json::json!({
                    "action": "closed",
                    "pull_request": { "merged": true, "commits": 4 }
                }),
            ),
            event(
                "PushEvent",
                serde_json::json!({
                    "commits": [
                        { "sha": "a1", "message": "one" },
                        { "sha": "b2", "message": "two" }
                    ]
                }),
            ),
        ];

        let summary = summarize(&events);

        assert_eq!(summary.commits, 6);
        assert_eq!(summary.opened_issues, 1);
        assert_eq!(summary.closed_issues, 0);
        assert_eq!(summary.opened_prs, 0);
        assert_eq!(summary.merged_prs, 1);
    }

    #[test]
    fn test_bounty_labels_sum_independently() {
        let summary = summarize(&[closed_issue_with_labels(&["Price: 250", "Price-75", "bug"])]);
        assert_eq!(summary.bounties_usd, 325);
        assert_eq!(summary.closed_issues, 1);
    }

    #[test]
    fn test_digitless_price_label_contributes_zero() {
        let summary = summarize(&[closed_issue_with_labels(&["Price", "Price: 40"])]);
        assert_eq!(summary.bounties_usd, 40);
    }

    #[test]
    fn test_unmerged_close_and_comment() {
        let events = vec![
            event(
                "PullRequestEvent",
                serde_json::json!({
                    "action": "closed",
                    "pull_request": { "merged": false, "commits": 3 }
                }),
            ),
            event("IssueCommentEvent", serde_json::json!({ "action": "created" })),
            event("IssueCommentEvent", serde_json::json!({ "action": "edited" })),
        ];

        let summary = summarize(&events);

        assert_eq!(summary.closed_prs, 1);
        assert_eq!(summary.merged_prs, 0);
        assert_eq!(summary.commits, 0);
        assert_eq!(summary.comments, 1);
    }

    #[test]
    fn test_unclassified_kinds_are_ignored() {
        let events = vec![
            event("WatchEvent", serde_json::json!({ "action": "started" })),
            event("ForkEvent", serde_json::json!({})),
        ];
        assert_eq!(summarize(&events), WeeklySummary::default());
    }

    #[test]
    fn test_malformed_payload_skips_one_event_only() {
        let events = vec![
            event("IssuesEvent", serde_json::json!({ "issue": "not-an-object" })),
            event(
                "IssuesEvent",
                serde_json::json!({ "action": "opened", "issue": { "number": 2, "labels": [] } }),
            ),
        ];

        let summary = summarize(&events);

        assert_eq!(summary.opened_issues, 1);
    }

    #[test]
    fn test_idempotent() {
        let events = vec![
            closed_issue_with_labels(&["Price: 10"]),
            event("PushEvent", serde_json::json!({ "commits": [{ "sha": "x", "message": "m" }] })),
        ];
        assert_eq!(summarize(&events), summarize(&events));
    }
}
