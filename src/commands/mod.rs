//! CLI subcommand handlers.
//!
//! This module groups the implementations for each `nexus-cred` action,
//! keeping the top-level `main.rs` lightweight while still allowing the
//! handlers to share utilities and types.

pub mod completions;
pub mod inject;
pub mod show;
pub mod version;
