//! Credentials management for Sonatype Nexus deployments.
//!
//! This module provides a trait-based interface for retrieving the deploy
//! credential pair. The default implementation reads the `SONATYPE_USERNAME`
//! and `SONATYPE_PASSWORD` environment variables, which is how the deploy
//! pipeline supplies them.
//!
//! Reading the process environment happens only here, at the edge; the
//! injection core takes an explicit [`Credential`] so it can be tested
//! without ambient state.

mod env;
mod provider;
mod types;

pub use env::{EnvProvider, PASSWORD_VAR, USERNAME_VAR};
pub use provider::CredentialsProvider;
pub use types::{Credential, CredentialError};
