//! nexus-cred - Inject Sonatype Nexus deploy credentials into Maven settings
//!
//! This is the main entry point for the CLI application.

mod cli;
mod color;
mod commands;
mod credentials;
mod settings;

fn main() {
  cli::run();
}
