//! Read-only inspection of the settings document.
//!
//! Implements `nexus-cred show`, which prints every server record in the
//! document's first `<servers>` container with passwords masked. Useful for
//! checking what a pipeline run actually wrote.

use std::fs;
use std::process;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::settings;

use super::inject::resolve_settings_path;

/// Print the server records currently present in the settings document.
pub(crate) fn handle_show_command(cli: &Cli, colors: &ColorScheme) {
  let path = resolve_settings_path(cli, colors);

  let input = match fs::read_to_string(&path) {
    Ok(input) => input,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Cannot read settings document"));
      eprintln!("  {}: {}", colors.emphasis("Settings"), colors.path(path.display()));
      eprintln!("  {e}");
      process::exit(1);
    }
  };

  let entries = match settings::list_servers(&input) {
    Ok(entries) => entries,
    Err(e) => {
      eprintln!("{} {}", colors.error("✗"), colors.error("Cannot analyze settings document"));
      eprintln!("  {e}");
      process::exit(1);
    }
  };

  println!("{}: {}", colors.emphasis("Settings"), colors.path(path.display()));

  if entries.is_empty() {
    println!("\n{} No server records found", colors.warning("⚠"));
    return;
  }

  for entry in &entries {
    println!(
      "\n{} {}",
      colors.info("→"),
      colors.emphasis(entry.id.as_deref().unwrap_or("(no id)"))
    );
    if let Some(username) = &entry.username {
      println!("  {}: {}", colors.dimmed("Username"), username);
    }
    if let Some(password) = &entry.password {
      println!("  {}: {}", colors.dimmed("Password"), colors.dimmed(mask(password)));
    }
  }

  println!(
    "\n{} {} server record(s)",
    colors.success("✓"),
    colors.number(entries.len())
  );
}

/// Mask a password for display, keeping a short recognizable prefix.
fn mask(value: &str) -> String {
  let len = value.chars().count();
  if len > 8 {
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}{}", "*".repeat(len - 4))
  } else {
    "*".repeat(len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mask_long_password_keeps_prefix() {
    assert_eq!(mask("correcthorse"), "corr********");
  }

  #[test]
  fn test_mask_short_password_fully_hidden() {
    assert_eq!(mask("hunter2"), "*******");
    assert_eq!(mask(""), "");
  }
}
