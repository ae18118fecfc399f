//! Falcon CLI
//!
//! Command-line interface for launching jobs on the Falcon platform.

mod api;
mod commands;
mod config;
mod console;
mod error;
mod negotiation;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "falcon")]
#[command(about = "Falcon job launch CLI", long_about = None)]
struct Cli {
    /// Platform URL, overriding the one selected by --version
    #[arg(long, global = true, env = "FALCON_PLATFORM_URL")]
    platform_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "falcon=warn,falcon_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    handle_command(cli.command, cli.platform_url).await
}
