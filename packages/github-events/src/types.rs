use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single entry from the public org event feed.
///
/// The feed mixes many event kinds behind one envelope, so the payload is
/// kept as raw JSON here and decoded per-kind via [`OrgEvent::decode_payload`].
/// That way one malformed payload never poisons the rest of a page.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl OrgEvent {
    /// Decode the raw payload into its typed form based on `kind`.
    ///
    /// Unknown kinds decode to [`EventPayload::Other`]; a known kind whose
    /// payload does not match the expected shape is an error, left to the
    /// caller to log and skip.
    pub fn decode_payload(&self) -> Result<EventPayload, serde_json::Error> {
        let payload = match self.kind.as_str() {
            "IssuesEvent" => EventPayload::Issues(serde_json::from_value(self.payload.clone())?),
            "IssueCommentEvent" => {
                EventPayload::IssueComment(serde_json::from_value(self.payload.clone())?)
            }
            "PullRequestEvent" => {
                EventPayload::PullRequest(serde_json::from_value(self.payload.clone())?)
            }
            "PushEvent" => EventPayload::Push(serde_json::from_value(self.payload.clone())?),
            _ => EventPayload::Other,
        };
        Ok(payload)
    }
}

/// Typed payloads for the event kinds the digest cares about.
///
/// Each variant carries only the fields downstream classification reads.
#[derive(Debug, Clone)]
pub enum EventPayload {
    Issues(IssuesPayload),
    IssueComment(IssueCommentPayload),
    PullRequest(PullRequestPayload),
    Push(PushPayload),
    /// Any kind the digest does not classify (watch, fork, create, ...).
    Other,
}

/// Payload of an `IssuesEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPayload {
    pub action: String,
    pub issue: Option<Issue>,
}

/// The issue attached to an `IssuesEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// An issue label. Only the display name matters downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Payload of an `IssueCommentEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentPayload {
    pub action: String,
}

/// Payload of a `PullRequestEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub action: String,
    pub pull_request: Option<PullRequest>,
}

/// The pull request attached to a `PullRequestEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub merged: bool,
    /// Number of commits on the PR, as reported by the API.
    #[serde(default)]
    pub commits: u64,
}

/// Payload of a `PushEvent`.
#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

/// One commit inside a push payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    pub sha: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, payload: serde_json::Value) -> OrgEvent {
        OrgEvent {
            id: "1".into(),
            kind: kind.into(),
            created_at: Utc::now(),
            payload,
        }
    }

    #[test]
    fn test_decode_issues_payload() {
        let ev = event(
            "IssuesEvent",
            serde_json::json!({
                "action": "closed",
                "issue": { "number": 42, "labels": [{ "name": "Price: 100" }] }
            }),
        );
        match ev.decode_payload().unwrap() {
            EventPayload::Issues(p) => {
                assert_eq!(p.action, "closed");
                assert_eq!(p.issue.unwrap().labels[0].name, "Price: 100");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_decode_push_payload() {
        let ev = event(
            "PushEvent",
            serde_json::json!({
                "commits": [
                    { "sha": "abc", "message": "fix" },
                    { "sha": "def", "message": "feat" }
                ]
            }),
        );
        match ev.decode_payload().unwrap() {
            EventPayload::Push(p) => assert_eq!(p.commits.len(), 2),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_decodes_to_other() {
        let ev = event("WatchEvent", serde_json::json!({ "action": "started" }));
        assert!(matches!(ev.decode_payload().unwrap(), EventPayload::Other));
    }

    #[test]
    fn test_malformed_known_kind_is_an_error() {
        let ev = event("IssuesEvent", serde_json::json!({ "issue": 7 }));
        assert!(ev.decode_payload().is_err());
    }

    #[test]
    fn test_envelope_deserializes_from_feed_json() {
        let raw = r#"{
            "id": "31415926535",
            "type": "PullRequestEvent",
            "created_at": "2024-03-04T12:30:00Z",
            "payload": { "action": "closed", "pull_request": { "merged": true, "commits": 4 } }
        }"#;
        let ev: OrgEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(ev.kind, "PullRequestEvent");
        match ev.decode_payload().unwrap() {
            EventPayload::PullRequest(p) => {
                let pr = p.pull_request.unwrap();
                assert!(pr.merged);
                assert_eq!(pr.commits, 4);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
