use camino::Utf8PathBuf;
use repoguard_github::LocalMirror;
use repoguard_policy::{ConfigError, ConfigStore, QueryError, RemoteQuery};
use std::fs;
use tempfile::TempDir;

fn mirror_with_repo(files: &[(&str, &str)]) -> (TempDir, LocalMirror) {
    let tmp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    let repo_dir = root.join("acme").join("widget");
    fs::create_dir_all(&repo_dir).unwrap();
    for (path, content) in files {
        let file = repo_dir.join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, content).unwrap();
    }
    (tmp, LocalMirror::new(root))
}

#[tokio::test]
async fn fetch_reads_file_under_repo_dir() {
    let (_tmp, mirror) = mirror_with_repo(&[(".repoguard/security.yaml", "action: issue\n")]);

    let text = mirror.fetch("acme", "widget", ".repoguard/security.yaml").await.unwrap();
    assert_eq!(text, "action: issue\n");
}

#[tokio::test]
async fn fetch_missing_file_is_not_found() {
    let (_tmp, mirror) = mirror_with_repo(&[]);

    let err = mirror.fetch("acme", "widget", ".repoguard/security.yaml").await.unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[tokio::test]
async fn policy_at_root_is_enabled() {
    let (_tmp, mirror) = mirror_with_repo(&[("SECURITY.md", "# Security\n")]);

    let state = mirror.security_policy("acme", "widget").await.unwrap();
    assert!(state.is_security_policy_enabled);
    assert!(state.security_policy_url.starts_with("file://"));
    assert!(state.security_policy_url.ends_with("SECURITY.md"));
}

#[tokio::test]
async fn policy_in_github_dir_matches_case_insensitively() {
    let (_tmp, mirror) = mirror_with_repo(&[(".github/security.md", "report to sec@example.com")]);

    let state = mirror.security_policy("acme", "widget").await.unwrap();
    assert!(state.is_security_policy_enabled);
    assert!(state.security_policy_url.ends_with(".github/security.md"));
}

#[tokio::test]
async fn policy_in_docs_dir_is_found() {
    let (_tmp, mirror) = mirror_with_repo(&[("docs/SECURITY.md", "x")]);

    let state = mirror.security_policy("acme", "widget").await.unwrap();
    assert!(state.is_security_policy_enabled);
}

#[tokio::test]
async fn no_policy_reports_disabled_with_empty_url() {
    let (_tmp, mirror) = mirror_with_repo(&[("README.md", "hello"), ("src/SECURITY.md", "x")]);

    let state = mirror.security_policy("acme", "widget").await.unwrap();
    assert!(!state.is_security_policy_enabled);
    assert_eq!(state.security_policy_url, "");
}

#[tokio::test]
async fn directory_named_like_policy_is_ignored() {
    let (_tmp, mirror) = mirror_with_repo(&[("SECURITY.md/notes.txt", "x")]);

    let state = mirror.security_policy("acme", "widget").await.unwrap();
    assert!(!state.is_security_policy_enabled);
}

#[tokio::test]
async fn missing_repo_is_an_error() {
    let (_tmp, mirror) = mirror_with_repo(&[]);

    let err = mirror.security_policy("acme", "gone").await.unwrap_err();
    assert!(matches!(err, QueryError::MissingRepository { .. }));
}

#[tokio::test]
async fn lookups_yield_to_runtime_deadline() {
    let (_tmp, mirror) = mirror_with_repo(&[("docs/SECURITY.md", "x")]);

    let (state, config) = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        tokio::join!(
            mirror.security_policy("acme", "widget"),
            mirror.fetch("acme", "widget", ".repoguard/security.yaml"),
        )
    })
    .await
    .unwrap();

    assert!(state.unwrap().is_security_policy_enabled);
    assert!(matches!(config, Err(ConfigError::NotFound { .. })));
}
