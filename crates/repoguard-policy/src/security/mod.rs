//! The `SECURITY.md` policy: a repository must publish a security policy.
//!
//! Configured by `security.yaml` at the org and repo level:
//!
//! ```yaml
//! optConfig:
//!   optOutStrategy: true
//!   optOutRepos: [sandbox]
//!   disableRepoOverride: false
//! action: issue
//! ```

mod config;


pub use config::{MergedConfig, OrgConfig, RepoConfig, merge_config};

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::resolver;
use crate::store::{ConfigStore, RemoteQuery, SecurityPolicyState};
use async_trait::async_trait;
use repoguard_types::{PolicyResult, SecurityDetails, ids};
use std::sync::Arc;

const NOT_ENABLED: &str = "Security policy not enabled.";

fn notify_text(owner: &str, repo: &str) -> String {
    format!(
        "{NOT_ENABLED}\n\
A SECURITY.md file tells users what counts as a vulnerability in this project and how to \
report one privately, so that details of an unfixed bug are not disclosed in public. Common \
reporting channels are an issue tracker with private issues, or encrypted email with a \
published key.\n\
\n\
To fix this, add a SECURITY.md file describing how vulnerabilities found in this repository \
should be reported and handled. Go to https://github.com/{owner}/{repo}/security/policy to \
enable.\n\
\n\
For more information, see \
https://docs.github.com/en/code-security/getting-started/adding-a-security-policy-to-your-repository."
    )
}

pub struct SecurityPolicy {
    store: Arc<dyn ConfigStore>,
    remote: Arc<dyn RemoteQuery>,
}

impl SecurityPolicy {
    pub fn new(store: Arc<dyn ConfigStore>, remote: Arc<dyn RemoteQuery>) -> Self {
        Self { store, remote }
    }

    async fn get_config(&self, owner: &str, repo: &str) -> (OrgConfig, RepoConfig) {
        resolver::get_config(
            self.store.as_ref(),
            owner,
            repo,
            ids::POLICY_SECURITY,
            ids::CONFIG_FILE_SECURITY,
        )
        .await
    }
}

fn to_result(owner: &str, repo: &str, enabled: bool, state: SecurityPolicyState) -> PolicyResult {
    let pass = state.is_security_policy_enabled;
    PolicyResult {
        enabled,
        pass,
        notify_text: if pass {
            String::new()
        } else {
            notify_text(owner, repo)
        },
        details: serde_json::to_value(SecurityDetails {
            enabled: pass,
            url: state.security_policy_url,
        })
        .unwrap_or_default(),
    }
}

#[async_trait]
impl Policy for SecurityPolicy {
    fn name(&self) -> &'static str {
        ids::POLICY_SECURITY
    }

    /// The remote query runs even when the policy is disabled for the repository;
    /// `enabled` is reported for the host to act on.
    async fn check(&self, owner: &str, repo: &str) -> Result<PolicyResult, PolicyError> {
        let ((oc, rc), state) = futures::join!(
            self.get_config(owner, repo),
            self.remote.security_policy(owner, repo),
        );

        let enabled = repoguard_settings::is_enabled(&oc.opt_config, &rc.opt_config, repo);
        tracing::info!(
            org = owner,
            repo,
            area = ids::POLICY_SECURITY,
            enabled,
            "check repo enabled"
        );

        Ok(to_result(owner, repo, enabled, state?))
    }

    /// Creating a policy file is not supported yet: this logs and reports success
    /// without touching the repository.
    async fn fix(&self, owner: &str, repo: &str) -> Result<(), PolicyError> {
        tracing::warn!(
            org = owner,
            repo,
            area = ids::POLICY_SECURITY,
            "action fix is configured, but not implemented"
        );
        Ok(())
    }

    async fn get_action(&self, owner: &str, repo: &str) -> String {
        let (oc, rc) = self.get_config(owner, repo).await;
        merge_config(&oc, &rc).action
    }
}
