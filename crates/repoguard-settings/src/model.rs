use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Org-level opt-in/opt-out policy, shared by every policy's org document.
///
/// This is a *user-facing* config model: every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgOptConfig {
    /// When true, every repository is enabled unless listed in `opt_out_repos`.
    /// When false, only repositories listed in `opt_in_repos` are enabled.
    pub opt_out_strategy: bool,

    pub opt_in_repos: Vec<String>,

    pub opt_out_repos: Vec<String>,

    /// Makes the org-level decisions final: repo-level documents cannot override them.
    pub disable_repo_override: bool,
}

/// Repo-level opt-in/opt-out, read from the repository's own document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoOptConfig {
    pub opt_in: bool,
    pub opt_out: bool,
}

impl RepoOptConfig {
    /// The repo's own enablement decision, if it made one. Opting out wins over opting in.
    pub fn decision(&self) -> Option<bool> {
        if self.opt_out {
            Some(false)
        } else if self.opt_in {
            Some(true)
        } else {
            None
        }
    }
}
