//! Maven `settings.xml` manipulation.
//!
//! This module owns the one real job of the tool: taking an existing
//! settings document, finding (or creating) the `<servers>` container, and
//! appending a `<server>` credential record to it.
//!
//! The document is never rebuilt from a DOM. Instead the source text is
//! parsed with `roxmltree` to locate byte offsets, and the new record is
//! spliced into the original string at the computed position. Everything the
//! document already contained is preserved byte-for-byte; only the inserted
//! record is new.
//!
//! Lookup semantics are deliberately "first match wins" for both the
//! `settings` root and the `servers` container, and repeated runs append
//! duplicate records rather than upserting by id. Both behaviors match the
//! deploy-pipeline script this tool replaces.

mod document;
mod inject;
mod types;

use std::path::{Path, PathBuf};

pub use document::list_servers;
pub use inject::{inject_credentials, inject_into_file};
pub use types::{ServerEntry, SettingsError};

/// Server id written into new records unless overridden with `--server-id`.
pub const DEFAULT_SERVER_ID: &str = "sonatype-nexus-snapshots";

/// Resolve the default settings document location, `~/.m2/settings.xml`.
///
/// # Errors
/// Returns [`SettingsError::HomeNotSet`] when the `HOME` environment
/// variable is absent and the path cannot be derived.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
  let home = std::env::var("HOME").map_err(|_| SettingsError::HomeNotSet)?;
  Ok(Path::new(&home).join(".m2").join("settings.xml"))
}
