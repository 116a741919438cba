//! Use case orchestration for repoguard.
//!
//! This crate provides the application layer: it plays the host for a set of policies, runs
//! them against one repository, dispatches the configured action, and renders the result.
//!
//! The CLI crate depends on this; it only handles argument parsing, wiring, and I/O.

#![forbid(unsafe_code)]

mod enforce;
mod render;
mod report;

pub use enforce::{EnforceInput, run_enforce, run_enforce_with_deadline};
pub use render::{render_markdown, serialize_report};
pub use report::{
    EnforceReport, IssueDraft, OutcomeStatus, PolicyOutcome, SCHEMA_ENFORCE_REPORT_V1, ToolMeta,
};
