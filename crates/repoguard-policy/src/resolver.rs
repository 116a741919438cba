//! Org/repo configuration loading.
//!
//! Fetch or decode failures never leave this module: the failing side is logged and
//! replaced by its defaults, so a broken document only removes customization.

use crate::error::ConfigError;
use crate::store::ConfigStore;
use repoguard_types::ids;
use serde::de::DeserializeOwned;

/// Load one document from `owner/repo` at `path`, or `T::default()` if that fails.
pub async fn load_config<T>(
    store: &dyn ConfigStore,
    owner: &str,
    repo: &str,
    path: &str,
    area: &str,
) -> T
where
    T: DeserializeOwned + Default + Send,
{
    match fetch_and_decode(store, owner, repo, path).await {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!(
                org = owner,
                repo,
                area,
                file = path,
                error = %err,
                "unexpected config error, using defaults"
            );
            T::default()
        }
    }
}

async fn fetch_and_decode<T>(
    store: &dyn ConfigStore,
    owner: &str,
    repo: &str,
    path: &str,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default + Send,
{
    let text = store.fetch(owner, repo, path).await?;
    repoguard_settings::parse_config_yaml(&text).map_err(|e| ConfigError::Decode(format!("{e:#}")))
}

/// Load the org-level and repo-level documents named `file` for `owner/repo`.
///
/// The org document is read from the org config repository, the repo document from the
/// target repository's config directory. Both fetches run concurrently.
pub async fn get_config<O, R>(
    store: &dyn ConfigStore,
    owner: &str,
    repo: &str,
    area: &str,
    file: &str,
) -> (O, R)
where
    O: DeserializeOwned + Default + Send,
    R: DeserializeOwned + Default + Send,
{
    let repo_path = ids::repo_config_path(file);
    futures::join!(
        load_config::<O>(store, owner, ids::ORG_CONFIG_REPO, file, area),
        load_config::<R>(store, owner, repo, &repo_path, area),
    )
}
