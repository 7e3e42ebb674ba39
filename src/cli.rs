//! Command-line interface definitions for nexus-cred.
//!
//! This module defines the CLI structure using clap derives. Running the
//! binary with no subcommand performs the injection, matching the
//! zero-argument invocation the deploy pipeline uses.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::inject::handle_inject_command;
use crate::commands::show::handle_show_command;
use crate::commands::version::handle_version_command;
use crate::settings::DEFAULT_SERVER_ID;

/// nexus-cred - Inject Sonatype Nexus deploy credentials into Maven settings
#[derive(Debug, Parser)]
#[command(
  name = "nexus-cred",
  version,
  about = "Inject Sonatype Nexus deploy credentials into Maven settings.xml",
  long_about = "A command-line tool that appends a Sonatype Nexus server credential record to the\n\
                local ~/.m2/settings.xml, creating the <servers> container when missing.\n\
                Credentials come from SONATYPE_USERNAME and SONATYPE_PASSWORD or CLI flags.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute; with none, the credential injection runs
  #[command(subcommand)]
  pub command: Option<Command>,

  /// Credential options
  #[command(flatten)]
  pub credentials: CredentialOptions,

  /// Settings document options
  #[command(flatten)]
  pub target: TargetOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Subcommands for inspection and tooling
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print the server records currently present in the settings document
  Show,

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Shells supported by the completions subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Credential options
#[derive(Debug, Parser)]
pub struct CredentialOptions {
  /// Deploy username (overrides SONATYPE_USERNAME)
  #[arg(long, value_name = "USER")]
  pub username: Option<String>,

  /// Deploy password (overrides SONATYPE_PASSWORD)
  #[arg(long, value_name = "PASS")]
  pub password: Option<String>,

  /// Server id written into the new record
  #[arg(long, default_value = DEFAULT_SERVER_ID, value_name = "ID")]
  pub server_id: String,
}

/// Settings document options
#[derive(Debug, Parser)]
pub struct TargetOptions {
  /// Path to the settings document (defaults to ~/.m2/settings.xml)
  #[arg(long, env = "M2_SETTINGS_PATH", value_name = "PATH")]
  pub settings: Option<PathBuf>,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Print the resulting document to stdout without writing the file
  #[arg(long)]
  pub dry_run: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Parse CLI arguments, initialize shared services, and dispatch to the
/// chosen command.
pub fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  // Create color scheme based on user preference
  let colors = ColorScheme::new(cli.behavior.color);

  match cli.command {
    Some(Command::Show) => handle_show_command(&cli, &colors),
    Some(Command::Version { json, short }) => handle_version_command(json, short, &colors),
    Some(Command::Completions { shell }) => handle_completions_command(shell),
    // No subcommand: perform the injection, as the pipeline invocation does
    None => handle_inject_command(&cli, &colors),
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
