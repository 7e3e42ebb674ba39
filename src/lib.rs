//! Nexus credential injector library
//!
//! This library provides functionality to inject Sonatype Nexus deploy
//! credentials into a Maven `settings.xml` document.

pub mod cli;
pub mod color;
pub mod commands;
pub mod credentials;
pub mod settings;
