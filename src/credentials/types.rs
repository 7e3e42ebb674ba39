//! Strongly typed credentials and related errors.
//!
//! These types are shared between credential providers and the higher-level
//! CLI logic so that callers can reason about usernames, passwords, and
//! failure modes consistently.

use std::fmt;

/// A deploy credential pair for the Nexus server record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
  /// The username written into the record's `<username>` field
  pub username: String,
  /// The password written into the record's `<password>` field
  pub password: String,
}

/// Errors that can occur during credential resolution.
#[derive(Debug)]
pub enum CredentialError {
  /// A password source exists but no username does
  MissingUsername,
  /// A username source exists but no password does
  MissingPassword,
}

impl fmt::Display for CredentialError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingUsername => write!(f, "SONATYPE_USERNAME is not set (or pass --username)"),
      Self::MissingPassword => write!(f, "SONATYPE_PASSWORD is not set (or pass --password)"),
    }
  }
}

impl std::error::Error for CredentialError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_credential_error_display() {
    assert!(CredentialError::MissingUsername.to_string().contains("SONATYPE_USERNAME"));
    assert!(CredentialError::MissingPassword.to_string().contains("SONATYPE_PASSWORD"));
  }

  #[test]
  fn test_credential_clone_and_equality() {
    let cred1 = Credential {
      username: "alice".to_string(),
      password: "secret".to_string(),
    };
    let cred2 = cred1.clone();
    let cred3 = Credential {
      username: "bob".to_string(),
      password: "secret".to_string(),
    };

    assert_eq!(cred1, cred2);
    assert_ne!(cred1, cred3);
  }

  #[test]
  fn test_credential_debug() {
    let cred = Credential {
      username: "alice".to_string(),
      password: "secret".to_string(),
    };
    let debug_str = format!("{cred:?}");
    assert!(debug_str.contains("Credential"));
    assert!(debug_str.contains("username"));
  }
}
