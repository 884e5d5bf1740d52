//! Report assembly: HTML panes for the rendered image and the plain
//! message block.
//!
//! The digest owns the markup; turning it into pixels (and compositing the
//! panes onto the branded background) belongs to whatever implements
//! [`ReportRenderer`]. Tests use the mock, production wires a headless
//! renderer.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{DigestError, Result};
use crate::summary::WeeklySummary;

const PANE_STYLE: &str = "
<style>
  body {
    font-family: 'Proxima Nova', sans-serif;
    color: white;
    font-size: 70px;
  }
  .pane {
    display: flex;
    flex-direction: column;
    align-items: center;
  }
  .elem-column {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    width: 100%;
  }
  .elem-row {
    display: flex;
    flex-direction: row;
    gap: 32px;
    width: 100%;
  }
</style>
";

const COMMIT_ICON: &str =
    r#"<svg viewBox="0 0 16 16" width="70" height="70" fill="currentColor"><circle cx="8" cy="8" r="3"/><path d="M0 7.25h4.5v1.5H0zm11.5 0H16v1.5h-4.5z"/></svg>"#;
const OPENED_ISSUE_ICON: &str =
    r#"<svg viewBox="0 0 16 16" width="70" height="70" fill="currentColor"><path d="M8 1.5a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13zM0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8z"/><circle cx="8" cy="8" r="1.5"/></svg>"#;
const CLOSED_ISSUE_ICON: &str =
    r#"<svg viewBox="0 0 16 16" width="70" height="70" fill="currentColor"><path d="M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0zm3.78 5.97-4.5 4.5-2.06-2.06 1.06-1.06 1 1 3.44-3.44z"/></svg>"#;
const OPENED_PULL_ICON: &str =
    r#"<svg viewBox="0 0 16 16" width="70" height="70" fill="currentColor"><path d="M3.25 4.5a1.25 1.25 0 1 1 0-2.5 1.25 1.25 0 0 1 0 2.5zm.75 1.37v4.26a2.75 2.75 0 1 1-1.5 0V5.87a2.75 2.75 0 1 1 1.5 0zm8 4.26V7a2 2 0 0 0-2-2H8.5l1.72-1.72L9.16 2.22 5.62 5.75l3.54 3.53 1.06-1.06L8.5 6.5H10a.5.5 0 0 1 .5.5v3.13a2.75 2.75 0 1 0 1.5 0z"/></svg>"#;
const MERGED_PULL_ICON: &str =
    r#"<svg viewBox="0 0 16 16" width="70" height="70" fill="currentColor"><path d="M5.45 5.15A4.98 4.98 0 0 1 4 4V10.13a2.75 2.75 0 1 1-1.5 0V5.87a2.75 2.75 0 1 1 2.1-.92 6.5 6.5 0 0 0 5.4 3.42 2.75 2.75 0 1 1-.03 1.5A8 8 0 0 1 5.45 5.15z"/></svg>"#;

/// The prose pane: the narrative blurb wrapped for rendering.
pub fn narrative_pane_html(narrative: &str) -> String {
    format!("{PANE_STYLE}<div class=\"pane\"><div>{narrative}</div></div>")
}

/// The counter pane: the summary grid the report image is built from.
///
/// Renders the five headline counters; the remaining fields live in the
/// caption block instead.
pub fn summary_pane_html(summary: &WeeklySummary) -> String {
    let row = |value: u64, icon: &str, label: &str| {
        format!(
            "<div class=\"elem-row\"><div class=\"elem-item\">{value}</div><div class=\"elem-item\">{icon}</div><div class=\"elem-item\">{label}</div></div>"
        )
    };

    format!(
        "{PANE_STYLE}<div class=\"elem-column\">{}{}{}{}{}</div>",
        row(summary.commits, COMMIT_ICON, "Commits"),
        row(summary.opened_issues, OPENED_ISSUE_ICON, "Issues Opened"),
        row(summary.closed_issues, CLOSED_ISSUE_ICON, "Issues Closed"),
        row(summary.opened_prs, OPENED_PULL_ICON, "Pull Requests Opened"),
        row(summary.merged_prs, MERGED_PULL_ICON, "Pull Requests Merged"),
    )
}

/// The plain `<code>` block enumerating every computed counter, suitable
/// for an HTML-mode chat message or image caption.
pub fn caption_block(summary: &WeeklySummary) -> String {
    format!(
        "<code>new issues: {}</code>\n\
         <code>issues resolved: {}</code>\n\
         <code>total user interactions count: {}</code>\n\
         <code>bounties given: {} USD</code>\n\
         <code>new pulls: {}</code>\n\
         <code>closed pulls: {}</code>\n\
         <code>merged pulls: {}</code>\n\
         <code>total commits: {}</code>\n",
        summary.opened_issues,
        summary.closed_issues,
        summary.comments,
        summary.bounties_usd,
        summary.opened_prs,
        summary.closed_prs,
        summary.merged_prs,
        summary.commits,
    )
}

/// Renders an HTML pane to an image file.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, html: &str, output: &Path) -> Result<()>;
}

/// Paths of the rendered panes, for compositing and delivery.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub narrative_pane: PathBuf,
    pub summary_pane: PathBuf,
}

/// Render both report panes into `out_dir`.
pub async fn render_report(
    renderer: &dyn ReportRenderer,
    out_dir: &Path,
    narrative: &str,
    summary: &WeeklySummary,
) -> Result<ReportArtifacts> {
    let artifacts = ReportArtifacts {
        narrative_pane: out_dir.join("narrative.png"),
        summary_pane: out_dir.join("counters.png"),
    };

    renderer
        .render(&narrative_pane_html(narrative), &artifacts.narrative_pane)
        .await?;
    renderer
        .render(&summary_pane_html(summary), &artifacts.summary_pane)
        .await?;

    tracing::info!(dir = %out_dir.display(), "Report panes rendered");
    Ok(artifacts)
}

/// Mock renderer: writes the HTML itself to the output path so tests can
/// inspect what would have been rasterized.
#[derive(Debug, Clone, Default)]
pub struct MockRenderer;

#[async_trait]
impl ReportRenderer for MockRenderer {
    async fn render(&self, html: &str, output: &Path) -> Result<()> {
        tokio::fs::write(output, html)
            .await
            .map_err(|e| DigestError::Render(Box::new(e)))
    }
}
