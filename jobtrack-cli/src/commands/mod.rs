//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod import;
mod job;
mod shell;

pub use job::FieldArgs;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use jobtrack_core::domain::job::JobId;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List tracked job applications
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a job application
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change fields of an existing job application
    Edit {
        /// Job ID
        id: JobId,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a job application
    Delete {
        /// Job ID
        id: JobId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create job applications from saved email messages
    Import {
        /// Raw RFC 822 message files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show what would be created without sending anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Interactive session
    Shell,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::List { json } => job::list_jobs(client, json).await,
        Commands::Add { fields } => job::add_job(client, fields).await,
        Commands::Edit { id, fields } => job::edit_job(client, id, fields).await,
        Commands::Delete { id, yes } => job::delete_job(client, id, yes).await,
        Commands::Import { files, dry_run } => import::import_files(client, &files, dry_run).await,
        Commands::Shell => shell::run(client).await,
    }
}
