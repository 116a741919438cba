use repoguard_types::{Action, PolicyResult};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for enforce reports.
pub const SCHEMA_ENFORCE_REPORT_V1: &str = "repoguard.enforce.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Pass,
    Fail,
    /// The policy is not enabled for this repository; its result is informational.
    Disabled,
    /// The check itself could not run.
    Error,
}

/// An issue the host would open for a failing policy configured with `action: issue`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    pub policy: String,
    pub status: OutcomeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PolicyResult>,

    /// Action dispatched for a failure. Only set when `status` is `fail`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueDraft>,

    #[serde(default)]
    pub fix_attempted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PolicyOutcome {
    pub(crate) fn new(policy: &str, status: OutcomeStatus) -> Self {
        Self {
            policy: policy.to_string(),
            status,
            result: None,
            action: None,
            issue: None,
            fix_attempted: false,
            error: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnforceReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub owner: String,
    pub repo: String,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub dry_run: bool,
    pub outcomes: Vec<PolicyOutcome>,
}

impl EnforceReport {
    /// 1 = a check could not run, 2 = an enabled policy failed, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self
            .outcomes
            .iter()
            .any(|o| o.status == OutcomeStatus::Error)
        {
            1
        } else if self.outcomes.iter().any(|o| o.status == OutcomeStatus::Fail) {
            2
        } else {
            0
        }
    }
}
