//! Stable identifiers for policies and configuration locations.
//!
//! Policy names double as the `area` field in structured logs.

// Policies
pub const POLICY_SECURITY: &str = "SECURITY.md";

pub const ALL_POLICIES: &[&str] = &[POLICY_SECURITY];

// Org-level documents live at the root of this repository in each org.
pub const ORG_CONFIG_REPO: &str = ".repoguard";

// Repo-level documents live under this directory in the target repository.
pub const REPO_CONFIG_DIR: &str = ".repoguard";

// Config files: policies
pub const CONFIG_FILE_SECURITY: &str = "security.yaml";

// Actions
pub const ACTION_LOG: &str = "log";
pub const ACTION_ISSUE: &str = "issue";
pub const ACTION_FIX: &str = "fix";

/// Repo-level path of a policy's config file, e.g. `.repoguard/security.yaml`.
pub fn repo_config_path(file: &str) -> String {
    format!("{REPO_CONFIG_DIR}/{file}")
}
