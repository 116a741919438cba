//! The `enforce` use case: run every policy against one repository and act on failures.

use crate::report::{
    EnforceReport, IssueDraft, OutcomeStatus, PolicyOutcome, SCHEMA_ENFORCE_REPORT_V1, ToolMeta,
};
use repoguard_policy::Policy;
use repoguard_types::Action;
use std::time::Duration;
use time::OffsetDateTime;

/// Input for the enforce use case.
#[derive(Clone, Debug)]
pub struct EnforceInput<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    /// Evaluate and report, but never call `Policy::fix`.
    pub dry_run: bool,
}

/// Run the enforce use case. Policies are evaluated concurrently; a policy whose check
/// fails to run is reported as an error without affecting the others.
pub async fn run_enforce(policies: &[Box<dyn Policy>], input: EnforceInput<'_>) -> EnforceReport {
    let started_at = OffsetDateTime::now_utc();

    let outcomes =
        futures::future::join_all(policies.iter().map(|p| enforce_one(p.as_ref(), &input))).await;

    EnforceReport {
        schema: SCHEMA_ENFORCE_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "repoguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        owner: input.owner.to_string(),
        repo: input.repo.to_string(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        dry_run: input.dry_run,
        outcomes,
    }
}

/// Run the enforce use case under a deadline. When it expires, in-flight checks are dropped
/// and the run fails instead of producing a partial report.
pub async fn run_enforce_with_deadline(
    policies: &[Box<dyn Policy>],
    input: EnforceInput<'_>,
    deadline: Duration,
) -> anyhow::Result<EnforceReport> {
    tokio::time::timeout(deadline, run_enforce(policies, input))
        .await
        .map_err(|_| anyhow::anyhow!("deadline exceeded after {}s", deadline.as_secs_f64()))
}

async fn enforce_one(policy: &dyn Policy, input: &EnforceInput<'_>) -> PolicyOutcome {
    let area = policy.name();
    let (owner, repo) = (input.owner, input.repo);

    let result = match policy.check(owner, repo).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(org = owner, repo, area, error = %err, "policy check failed");
            let mut outcome = PolicyOutcome::new(area, OutcomeStatus::Error);
            outcome.error = Some(err.to_string());
            return outcome;
        }
    };

    if !result.enabled {
        tracing::debug!(org = owner, repo, area, pass = result.pass, "policy not enabled");
        let mut outcome = PolicyOutcome::new(area, OutcomeStatus::Disabled);
        outcome.result = Some(result);
        return outcome;
    }

    if result.pass {
        let mut outcome = PolicyOutcome::new(area, OutcomeStatus::Pass);
        outcome.result = Some(result);
        return outcome;
    }

    let configured = policy.get_action(owner, repo).await;
    let action = configured.parse::<Action>().unwrap_or_else(|err| {
        tracing::warn!(org = owner, repo, area, error = %err, "falling back to log action");
        Action::Log
    });

    let mut outcome = PolicyOutcome::new(area, OutcomeStatus::Fail);
    outcome.action = Some(action);
    match action {
        Action::Log => {
            tracing::info!(org = owner, repo, area, "policy failed");
        }
        Action::Issue => {
            tracing::info!(org = owner, repo, area, "policy failed, drafting issue");
            outcome.issue = Some(IssueDraft {
                title: format!("{area} policy violation"),
                body: result.notify_text.clone(),
            });
        }
        Action::Fix if input.dry_run => {
            tracing::info!(org = owner, repo, area, "policy failed, dry run skips fix");
        }
        Action::Fix => {
            outcome.fix_attempted = true;
            if let Err(err) = policy.fix(owner, repo).await {
                tracing::error!(org = owner, repo, area, error = %err, "fix failed");
                outcome.error = Some(err.to_string());
            }
        }
    }
    outcome.result = Some(result);
    outcome
}
