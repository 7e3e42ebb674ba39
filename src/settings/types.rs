//! Strongly typed settings-document results and errors.
//!
//! These types are shared between the injection path and the read-only
//! `show` path so that callers can reason about failure modes consistently.

use std::fmt;

/// One decoded `<server>` record from a settings document.
///
/// Fields are optional because the tool never validates the document against
/// the Maven schema; a record missing any of the three children is reported
/// as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
  /// The `<id>` child text, if present
  pub id: Option<String>,
  /// The `<username>` child text, if present
  pub username: Option<String>,
  /// The `<password>` child text, if present
  pub password: Option<String>,
}

/// Errors that can occur while reading, analyzing, or rewriting a settings
/// document.
#[derive(Debug)]
pub enum SettingsError {
  /// The `HOME` environment variable is not set, so the default
  /// `~/.m2/settings.xml` path cannot be resolved
  HomeNotSet,
  /// An I/O error occurred while reading or writing the document
  Io(std::io::Error),
  /// The document is not well-formed XML
  Parse(roxmltree::Error),
  /// The document is well-formed but its root element is not `<settings>`
  MissingSettingsRoot,
}

impl fmt::Display for SettingsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::HomeNotSet => write!(f, "HOME is not set; cannot locate ~/.m2/settings.xml"),
      Self::Io(err) => write!(f, "I/O error: {err}"),
      Self::Parse(err) => write!(f, "failed to parse settings XML: {err}"),
      Self::MissingSettingsRoot => write!(f, "document has no <settings> root element"),
    }
  }
}

impl std::error::Error for SettingsError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(err) => Some(err),
      Self::Parse(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for SettingsError {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<roxmltree::Error> for SettingsError {
  fn from(err: roxmltree::Error) -> Self {
    Self::Parse(err)
  }
}
