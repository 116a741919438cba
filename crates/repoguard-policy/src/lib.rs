//! Repository compliance policies.
//!
//! Input: an owner/repo pair plus injected collaborators ([`ConfigStore`], [`RemoteQuery`]).
//! Output: a uniform [`repoguard_types::PolicyResult`] per policy, and the configured action.

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod resolver;
pub mod security;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{ConfigError, PolicyError, QueryError};
pub use policy::Policy;
pub use security::SecurityPolicy;
pub use store::{ConfigStore, RemoteQuery, SecurityPolicyState};

use std::sync::Arc;

/// Every policy this crate knows about, wired to the same collaborators.
pub fn policies(store: Arc<dyn ConfigStore>, remote: Arc<dyn RemoteQuery>) -> Vec<Box<dyn Policy>> {
    vec![Box::new(SecurityPolicy::new(store, remote))]
}
