//! Environment-variable credential discovery.
//!
//! Provides a [`CredentialsProvider`] implementation that reads the deploy
//! credential pair from `SONATYPE_USERNAME` and `SONATYPE_PASSWORD`. This is
//! the source the CI pipeline populates, so it is the default provider.

use super::{Credential, CredentialError, CredentialsProvider};

/// Environment variable holding the deploy username.
pub const USERNAME_VAR: &str = "SONATYPE_USERNAME";

/// Environment variable holding the deploy password.
pub const PASSWORD_VAR: &str = "SONATYPE_PASSWORD";

/// A credentials provider that reads from the process environment.
///
/// Both variables must be present together: a half-configured environment is
/// an error rather than a silent fallback, since injecting a record with an
/// empty field would poison the settings document.
#[derive(Debug, Default)]
pub struct EnvProvider;

impl EnvProvider {
  /// Creates a new environment credentials provider.
  pub fn new() -> Self {
    Self
  }
}

impl CredentialsProvider for EnvProvider {
  /// Resolve the credential pair from `SONATYPE_USERNAME` and
  /// `SONATYPE_PASSWORD`.
  ///
  /// # Returns
  /// * `Ok(Some(Credential))` when both variables are set.
  /// * `Ok(None)` when neither is set.
  ///
  /// # Errors
  /// Returns `Err(CredentialError)` naming the missing variable when exactly
  /// one of the two is set.
  fn get_credentials(&self) -> Result<Option<Credential>, CredentialError> {
    resolve(std::env::var(USERNAME_VAR).ok(), std::env::var(PASSWORD_VAR).ok())
  }
}

/// Combine the two optional variable values into a provider result.
fn resolve(username: Option<String>, password: Option<String>) -> Result<Option<Credential>, CredentialError> {
  match (username, password) {
    (Some(username), Some(password)) => Ok(Some(Credential { username, password })),
    (None, None) => Ok(None),
    (Some(_), None) => Err(CredentialError::MissingPassword),
    (None, Some(_)) => Err(CredentialError::MissingUsername),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_complete_pair() {
    let result = resolve(Some("alice".to_string()), Some("secret".to_string())).unwrap();

    let cred = result.unwrap();
    assert_eq!(cred.username, "alice");
    assert_eq!(cred.password, "secret");
  }

  #[test]
  fn test_resolve_nothing_set() {
    let result = resolve(None, None).unwrap();
    assert!(result.is_none());
  }

  #[test]
  fn test_resolve_missing_password() {
    let result = resolve(Some("alice".to_string()), None);
    assert!(matches!(result, Err(CredentialError::MissingPassword)));
  }

  #[test]
  fn test_resolve_missing_username() {
    let result = resolve(None, Some("secret".to_string()));
    assert!(matches!(result, Err(CredentialError::MissingUsername)));
  }

  #[test]
  fn test_env_provider_reads_process_environment() {
    use std::env;

    // Set, read, and clean up within one test so parallel tests in this
    // module never observe a half-mutated environment.
    unsafe {
      env::set_var(USERNAME_VAR, "ci-user");
      env::set_var(PASSWORD_VAR, "ci-pass");
    }

    let provider = EnvProvider::new();
    let cred = provider.get_credentials().unwrap().unwrap();
    assert_eq!(cred.username, "ci-user");
    assert_eq!(cred.password, "ci-pass");

    unsafe {
      env::remove_var(PASSWORD_VAR);
    }
    assert!(matches!(
      provider.get_credentials(),
      Err(CredentialError::MissingPassword)
    ));

    unsafe {
      env::remove_var(USERNAME_VAR);
    }
    assert!(provider.get_credentials().unwrap().is_none());
  }
}
