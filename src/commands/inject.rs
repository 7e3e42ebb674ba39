//! Credential injection handler.
//!
//! This is the default action: resolve the credential pair, locate the
//! settings document, and append the new server record. All failures are
//! fatal; the file is only written once injection has fully succeeded in
//! memory.

use std::path::{Path, PathBuf};
use std::process;
use std::fs;

use tracing::info;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::credentials::{Credential, CredentialsProvider, EnvProvider, PASSWORD_VAR, USERNAME_VAR};
use crate::settings::{self, SettingsError};

/// Run the injection described by the parsed CLI options.
///
/// Exits with status `2` when no usable credential pair can be resolved and
/// `1` for any settings-document failure (unreadable file, malformed XML,
/// missing `<settings>` root, write failure).
pub(crate) fn handle_inject_command(cli: &Cli, colors: &ColorScheme) {
  let credential = match load_credentials(cli) {
    Ok(credential) => credential,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Failed to load credentials"));
      eprintln!("  {e}");
      eprintln!("\n{}", colors.info("Provide credentials via:"));
      eprintln!("  • Environment variables: {USERNAME_VAR} and {PASSWORD_VAR}");
      eprintln!("  • CLI flags: --username and --password");
      process::exit(2);
    }
  };

  let path = resolve_settings_path(cli, colors);
  let server_id = cli.credentials.server_id.as_str();

  info!("injecting server record {} into {}", server_id, path.display());

  if cli.behavior.dry_run {
    let result = fs::read_to_string(&path)
      .map_err(SettingsError::from)
      .and_then(|input| settings::inject_credentials(&input, &credential, server_id));
    match result {
      Ok(output) => println!("{output}"),
      Err(e) => report_settings_error(&path, &e, colors),
    }
    return;
  }

  match settings::inject_into_file(&path, &credential, server_id) {
    Ok(()) => {
      println!(
        "{} {} {}",
        colors.success("✓"),
        colors.success("Added server record"),
        colors.code(server_id)
      );
      println!("  {}: {}", colors.emphasis("Settings"), colors.path(path.display()));
      println!("  {}: {}", colors.emphasis("Username"), credential.username);
    }
    Err(e) => report_settings_error(&path, &e, colors),
  }
}

/// Resolve the deploy credential pair from CLI flags or the environment.
///
/// The lookup order honors explicit CLI input first, then falls back to the
/// `SONATYPE_*` environment variables; a flag can fill in one half of an
/// otherwise environment-sourced pair.
///
/// # Errors
/// Returns an error when the environment is partially populated or when no
/// credential source provides both username and password.
pub(crate) fn load_credentials(cli: &Cli) -> anyhow::Result<Credential> {
  let username = cli.credentials.username.clone();
  let password = cli.credentials.password.clone();

  // If both flags are provided, the environment is not consulted at all
  if let (Some(username), Some(password)) = (username.clone(), password.clone()) {
    return Ok(Credential { username, password });
  }

  let provider = EnvProvider::new();
  if let Some(creds) = provider.get_credentials()? {
    return Ok(Credential {
      username: username.unwrap_or(creds.username),
      password: password.unwrap_or(creds.password),
    });
  }

  anyhow::bail!(
    "Credentials not found. Set {USERNAME_VAR} and {PASSWORD_VAR}, or provide --username and --password"
  )
}

/// Resolve the settings document path from the CLI, or exit.
///
/// A missing `HOME` with no `--settings` override is a configuration
/// failure, reported with exit status `2`.
pub(crate) fn resolve_settings_path(cli: &Cli, colors: &ColorScheme) -> PathBuf {
  if let Some(path) = &cli.target.settings {
    return path.clone();
  }

  match settings::settings_path() {
    Ok(path) => path,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Cannot locate settings document"));
      eprintln!("  {e}");
      eprintln!("\n  Pass --settings <PATH> to point at the document explicitly");
      process::exit(2);
    }
  }
}

/// Report a fatal settings-document failure and exit with status `1`.
fn report_settings_error(path: &Path, err: &SettingsError, colors: &ColorScheme) -> ! {
  eprintln!("{} {}", colors.error("✗"), colors.error("Failed to update settings document"));
  eprintln!("  {}: {}", colors.emphasis("Settings"), colors.path(path.display()));
  eprintln!("  {err}");
  process::exit(1);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cli::{BehaviorOptions, ColorOption, CredentialOptions, TargetOptions};

  fn cli_with_flags(username: Option<&str>, password: Option<&str>) -> Cli {
    Cli {
      command: None,
      credentials: CredentialOptions {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
        server_id: settings::DEFAULT_SERVER_ID.to_string(),
      },
      target: TargetOptions { settings: None },
      behavior: BehaviorOptions {
        dry_run: false,
        verbose: 0,
        quiet: false,
        color: ColorOption::Never,
      },
    }
  }

  #[test]
  fn test_load_credentials_from_flags() {
    let cli = cli_with_flags(Some("alice"), Some("secret"));

    let credential = load_credentials(&cli).unwrap();
    assert_eq!(credential.username, "alice");
    assert_eq!(credential.password, "secret");
  }

  #[test]
  fn test_resolve_settings_path_flag_override() {
    let mut cli = cli_with_flags(Some("alice"), Some("secret"));
    cli.target.settings = Some(PathBuf::from("/tmp/custom-settings.xml"));

    let colors = ColorScheme::new(ColorOption::Never);
    let path = resolve_settings_path(&cli, &colors);
    assert_eq!(path, PathBuf::from("/tmp/custom-settings.xml"));
  }
}
