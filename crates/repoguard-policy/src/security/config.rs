use repoguard_settings::{OrgOptConfig, RepoOptConfig, resolve_override};
use repoguard_types::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Org-level `security.yaml`, read from the org config repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgConfig {
    /// Org opt-in/opt-out policy. `disableRepoOverride` also locks `action`.
    pub opt_config: OrgOptConfig,

    /// Action taken on failure: `log` (default), `issue`, or `fix`.
    pub action: String,
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            opt_config: OrgOptConfig::default(),
            action: ids::ACTION_LOG.to_string(),
        }
    }
}

/// Repo-level `.repoguard/security.yaml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoConfig {
    pub opt_config: RepoOptConfig,

    /// Overrides the org action when present and the org allows overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedConfig {
    pub action: String,
}

pub fn merge_config(oc: &OrgConfig, rc: &RepoConfig) -> MergedConfig {
    MergedConfig {
        action: resolve_override(
            oc.action.clone(),
            rc.action.clone(),
            oc.opt_config.disable_repo_override,
        ),
    }
}
