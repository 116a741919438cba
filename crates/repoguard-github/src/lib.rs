//! Adapters that feed repoguard policies.
//!
//! - [`GitHubClient`]: REST contents API for config documents, GraphQL for repository state.
//! - [`LocalMirror`]: a directory tree of checked-out repositories, for offline runs.

#![forbid(unsafe_code)]

mod client;
mod graphql;
mod mirror;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use mirror::LocalMirror;
