//! In-memory collaborators for tests.

use crate::error::{ConfigError, QueryError};
use crate::store::{ConfigStore, RemoteQuery, SecurityPolicyState};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Entry {
    Document(String),
    TransportError(String),
}

/// Config store backed by a map of `owner/repo/path` to document text.
///
/// Paths with no entry report [`ConfigError::NotFound`].
#[derive(Default)]
pub struct MemoryConfigStore {
    entries: BTreeMap<String, Entry>,
    fetches: AtomicUsize,
}

fn key(owner: &str, repo: &str, path: &str) -> String {
    format!("{owner}/{repo}/{path}")
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, owner: &str, repo: &str, path: &str, text: &str) -> Self {
        self.entries
            .insert(key(owner, repo, path), Entry::Document(text.to_string()));
        self
    }

    pub fn with_transport_error(mut self, owner: &str, repo: &str, path: &str, msg: &str) -> Self {
        self.entries
            .insert(key(owner, repo, path), Entry::TransportError(msg.to_string()));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn fetch(&self, owner: &str, repo: &str, path: &str) -> Result<String, ConfigError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.entries.get(&key(owner, repo, path)) {
            Some(Entry::Document(text)) => Ok(text.clone()),
            Some(Entry::TransportError(msg)) => Err(ConfigError::Transport(msg.clone())),
            None => Err(ConfigError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

/// Remote that always reports the same state and counts queries.
pub struct StaticRemoteQuery {
    state: SecurityPolicyState,
    calls: AtomicUsize,
}

impl StaticRemoteQuery {
    pub fn new(state: SecurityPolicyState) -> Self {
        Self {
            state,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn enabled(url: &str) -> Self {
        Self::new(SecurityPolicyState {
            security_policy_url: url.to_string(),
            is_security_policy_enabled: true,
        })
    }

    pub fn disabled() -> Self {
        Self::new(SecurityPolicyState::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteQuery for StaticRemoteQuery {
    async fn security_policy(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<SecurityPolicyState, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.clone())
    }
}

/// Remote whose every query fails at the transport level.
pub struct FailingRemoteQuery {
    pub message: String,
}

impl FailingRemoteQuery {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl RemoteQuery for FailingRemoteQuery {
    async fn security_policy(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<SecurityPolicyState, QueryError> {
        Err(QueryError::Transport(self.message.clone()))
    }
}
