//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod launch;

pub use launch::{LaunchArgs, LaunchCommand};

use anyhow::Result;
use clap::Subcommand;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch a job on the Falcon platform
    Launch(LaunchCommand),
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `platform_url` - Explicit platform URL, overriding the version's default
pub async fn handle_command(command: Commands, platform_url: Option<String>) -> Result<()> {
    match command {
        Commands::Launch(command) => launch::handle_launch_command(command, platform_url).await,
    }
}
