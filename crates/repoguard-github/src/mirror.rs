use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use repoguard_policy::{ConfigError, ConfigStore, QueryError, RemoteQuery, SecurityPolicyState};
use std::io;
use tokio::fs;

/// Directories searched for a security policy, in the order the hosting service uses.
const POLICY_DIRS: &[&str] = &["", ".github", "docs"];

const POLICY_FILE: &str = "SECURITY.md";

/// A local tree laid out as `<root>/<owner>/<repo>/...`.
///
/// Serves config documents from the tree, and reports a repository's security policy as
/// enabled when it contains a `SECURITY.md` file. File IO goes through `tokio::fs`, so a
/// Tokio runtime is required.
#[derive(Clone, Debug)]
pub struct LocalMirror {
    root: Utf8PathBuf,
}

impl LocalMirror {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn repo_dir(&self, owner: &str, repo: &str) -> Utf8PathBuf {
        self.root.join(owner).join(repo)
    }
}

async fn find_policy_file(dir: &Utf8Path) -> io::Result<Option<Utf8PathBuf>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.eq_ignore_ascii_case(POLICY_FILE) && entry.file_type().await?.is_file() {
            return Ok(Some(dir.join(name)));
        }
    }
    Ok(None)
}

#[async_trait]
impl ConfigStore for LocalMirror {
    async fn fetch(&self, owner: &str, repo: &str, path: &str) -> Result<String, ConfigError> {
        let file = self.repo_dir(owner, repo).join(path);
        match fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                path: file.to_string(),
            }),
            Err(e) => Err(ConfigError::Transport(format!("read {file}: {e}"))),
        }
    }
}

#[async_trait]
impl RemoteQuery for LocalMirror {
    async fn security_policy(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<SecurityPolicyState, QueryError> {
        let repo_dir = self.repo_dir(owner, repo);
        let is_dir = fs::metadata(&repo_dir).await.is_ok_and(|m| m.is_dir());
        if !is_dir {
            return Err(QueryError::MissingRepository {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }

        for sub in POLICY_DIRS {
            let dir = if sub.is_empty() {
                repo_dir.clone()
            } else {
                repo_dir.join(sub)
            };
            let found = find_policy_file(&dir)
                .await
                .map_err(|e| QueryError::Transport(format!("scan {dir}: {e}")))?;
            if let Some(path) = found {
                return Ok(SecurityPolicyState {
                    security_policy_url: format!("file://{path}"),
                    is_security_policy_enabled: true,
                });
            }
        }

        Ok(SecurityPolicyState::default())
    }
}
