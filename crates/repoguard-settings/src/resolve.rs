use crate::model::{OrgOptConfig, RepoOptConfig};

/// Layer a repo-level value over an org-level one.
///
/// The repo value wins when present, unless the org disabled repo overrides.
/// Eligibility and action merging both go through here.
pub fn resolve_override<T>(org: T, repo: Option<T>, disable_repo_override: bool) -> T {
    match repo {
        Some(value) if !disable_repo_override => value,
        _ => org,
    }
}

/// The org-level enablement decision for `repo`, ignoring any repo document.
pub fn org_decision(org: &OrgOptConfig, repo: &str) -> bool {
    if org.opt_out_strategy {
        !org.opt_out_repos.iter().any(|r| r == repo)
    } else {
        org.opt_in_repos.iter().any(|r| r == repo)
    }
}

/// Whether a policy is enabled for `repo` given the org and repo opt configs.
pub fn is_enabled(org: &OrgOptConfig, repo_opt: &RepoOptConfig, repo: &str) -> bool {
    resolve_override(
        org_decision(org, repo),
        repo_opt.decision(),
        org.disable_repo_override,
    )
}
