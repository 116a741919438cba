//! Render use cases: Markdown summary and JSON serialization of enforce reports.

use crate::report::{EnforceReport, OutcomeStatus};
use anyhow::Context;

pub fn serialize_report(report: &EnforceReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

fn status_label(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Pass => "pass",
        OutcomeStatus::Fail => "fail",
        OutcomeStatus::Disabled => "disabled",
        OutcomeStatus::Error => "error",
    }
}

pub fn render_markdown(report: &EnforceReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("## repoguard: {}/{}\n\n", report.owner, report.repo));

    if report.outcomes.is_empty() {
        out.push_str("No policies evaluated.\n");
        return out;
    }

    out.push_str("| Policy | Status | Action |\n");
    out.push_str("|---|---|---|\n");
    for outcome in &report.outcomes {
        let action = outcome
            .action
            .map(|a| a.as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            outcome.policy,
            status_label(outcome.status),
            action
        ));
    }

    for outcome in &report.outcomes {
        match outcome.status {
            OutcomeStatus::Fail => {
                let text = outcome
                    .result
                    .as_ref()
                    .map(|r| r.notify_text.as_str())
                    .unwrap_or_default();
                out.push_str(&format!("\n### `{}`\n\n{}\n", outcome.policy, text.trim_end()));
            }
            OutcomeStatus::Error => {
                let err = outcome.error.as_deref().unwrap_or("unknown error");
                out.push_str(&format!("\n### `{}`\n\nCheck failed: {}\n", outcome.policy, err));
            }
            OutcomeStatus::Pass | OutcomeStatus::Disabled => {}
        }
    }

    if report.dry_run {
        out.push_str("\n_Dry run: no fixes were attempted._\n");
    }

    out
}
