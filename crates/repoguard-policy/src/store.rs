//! Collaborators a policy reads from. Implementations live in adapter crates.

use crate::error::{ConfigError, QueryError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reads raw configuration documents from a repository.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Return the text of `path` in `owner/repo`.
    async fn fetch(&self, owner: &str, repo: &str, path: &str) -> Result<String, ConfigError>;
}

/// Live security-policy state of a repository, as reported by the hosting service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicyState {
    /// Empty when the repository has no policy.
    pub security_policy_url: String,
    pub is_security_policy_enabled: bool,
}

/// Read-only queries against the hosting service's repository metadata.
#[async_trait]
pub trait RemoteQuery: Send + Sync {
    async fn security_policy(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<SecurityPolicyState, QueryError>;
}
