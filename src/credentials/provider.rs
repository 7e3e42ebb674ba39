//! Credential provider abstractions.
//!
//! Defines the [`CredentialsProvider`] trait so different credential
//! backends (environment variables, custom stores) can plug into the rest of
//! the application without changing call sites.

use super::{Credential, CredentialError};

/// A provider for retrieving the deploy credential pair.
pub trait CredentialsProvider {
  /// Retrieves the credential pair from this provider's backing source.
  ///
  /// # Returns
  /// * `Ok(Some(Credential))` when the provider holds a complete pair.
  /// * `Ok(None)` when the provider has no credentials at all, allowing
  ///   fallback providers to run.
  ///
  /// # Errors
  /// Returns `Err(CredentialError)` when the source is partially populated
  /// (for example, a username without a password).
  fn get_credentials(&self) -> Result<Option<Credential>, CredentialError>;
}
