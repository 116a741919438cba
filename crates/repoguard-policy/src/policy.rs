use crate::error::PolicyError;
use async_trait::async_trait;
use repoguard_types::PolicyResult;

/// The contract every policy satisfies, so the host can hold them as `Box<dyn Policy>`.
#[async_trait]
pub trait Policy: Send + Sync {
    /// Stable policy name, also used as the `area` log field.
    fn name(&self) -> &'static str;

    /// Evaluate the policy against `owner/repo` using the org/repo configuration.
    async fn check(&self, owner: &str, repo: &str) -> Result<PolicyResult, PolicyError>;

    /// Attempt to bring `owner/repo` into compliance.
    async fn fix(&self, owner: &str, repo: &str) -> Result<(), PolicyError>;

    /// The configured remediation action for `owner/repo`, as written in config.
    async fn get_action(&self, owner: &str, repo: &str) -> String;
}
