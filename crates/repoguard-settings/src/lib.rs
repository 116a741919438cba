//! Org/repo configuration models and their resolution.
//!
//! This crate is intentionally IO-free: it decodes configuration provided as strings and
//! resolves the org/repo layering. Fetching documents is the policy layer's job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{OrgOptConfig, RepoOptConfig};
pub use resolve::{is_enabled, org_decision, resolve_override};

use serde::de::DeserializeOwned;

/// Decode a YAML policy document into a typed model.
///
/// An empty document yields `T::default()`; keys absent from the document keep the
/// model's defaults as long as the model is `#[serde(default)]`.
pub fn parse_config_yaml<T>(input: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
{
    if input.trim().is_empty() {
        return Ok(T::default());
    }
    let cfg: T = serde_yaml::from_str(input)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg: OrgOptConfig = parse_config_yaml("  \n").unwrap();
        assert_eq!(cfg, OrgOptConfig::default());
    }

    #[test]
    fn camel_case_keys_decode() {
        let cfg: OrgOptConfig = parse_config_yaml(
            r#"
optOutStrategy: true
optOutRepos:
  - legacy
disableRepoOverride: true
"#,
        )
        .unwrap();
        assert!(cfg.opt_out_strategy);
        assert!(cfg.disable_repo_override);
        assert_eq!(cfg.opt_out_repos, vec!["legacy".to_string()]);
        assert!(cfg.opt_in_repos.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let res: anyhow::Result<RepoOptConfig> = parse_config_yaml("optIn: [unterminated");
        assert!(res.is_err());

        let res: anyhow::Result<RepoOptConfig> = parse_config_yaml("optIn: sometimes");
        assert!(res.is_err());
    }
}
