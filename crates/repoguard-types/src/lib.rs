//! Stable DTOs and IDs used across the repoguard workspace.
//!
//! This crate is intentionally boring:
//! - the uniform result every policy returns
//! - remediation action names
//! - stable policy names and configuration locations

#![forbid(unsafe_code)]

pub mod action;
pub mod ids;
pub mod result;

pub use action::{Action, UnknownAction};
pub use result::{PolicyResult, SecurityDetails};
