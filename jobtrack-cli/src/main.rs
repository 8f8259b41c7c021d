//! Jobtrack CLI
//!
//! Command-line interface for tracking job applications in a remote job store.

mod commands;
mod config;
mod prompt;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Job application tracker", long_about = None)]
struct Cli {
    /// Job store URL
    #[arg(
        long,
        env = "JOBTRACK_STORE_URL",
        default_value = "http://localhost:8080"
    )]
    store_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "JOBTRACK_TIMEOUT")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobtrack=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        store_url: cli.store_url,
        request_timeout: cli.timeout.map(Duration::from_secs),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
