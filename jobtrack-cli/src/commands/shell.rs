//! Interactive shell
//!
//! Keeps one controller alive across commands so the list, the open form and
//! the error banner persist between lines, the way a UI session would.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use jobtrack_client::JobStoreClient;
use jobtrack_controller::{ControllerError, DeleteOutcome, DraftField, JobListController};
use jobtrack_core::domain::job::JobId;

use crate::prompt;
use crate::render;

#[derive(Parser, Debug)]
#[command(name = "jobtrack", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum ShellCommand {
    /// Show the current list
    List,
    /// Reload the list from the job store
    Refresh,
    /// Open the form for a new job
    New,
    /// Open the form on an existing job
    Edit { id: JobId },
    /// Set a draft field (company, title, status, date, notes)
    Set {
        field: DraftField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Show the open form
    Show,
    /// Submit the open form
    Save,
    /// Close the form without saving
    Cancel,
    /// Delete a job after confirmation
    Delete { id: JobId },
    /// Hide the error banner
    Dismiss,
}

pub async fn run(client: JobStoreClient) -> Result<()> {
    let mut controller = JobListController::new(client);

    println!("{}", "jobtrack shell. Type 'help' for commands, 'exit' to leave.".dimmed());
    if controller.load_all().await.is_ok() {
        render::print_job_list(&controller.state().jobs());
    }
    show_banner(&controller);

    while let Some(line) = prompt::read_line(&prompt_for(&controller))? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match ShellLine::try_parse_from(words) {
            Ok(parsed) => {
                if let Err(e) = execute(&mut controller, parsed.command).await {
                    report(&e);
                }
            }
            Err(e) => eprintln!("{}", e),
        }
        show_banner(&controller);
    }

    Ok(())
}

async fn execute(
    controller: &mut JobListController<JobStoreClient>,
    command: ShellCommand,
) -> Result<(), ControllerError> {
    match command {
        ShellCommand::List => render::print_job_list(&controller.state().jobs()),
        ShellCommand::Refresh => {
            controller.load_all().await?;
            render::print_job_list(&controller.state().jobs());
        }
        ShellCommand::New => {
            controller.open_for_create()?;
            render::print_form(controller.form());
        }
        ShellCommand::Edit { id } => {
            controller.open_for_edit(&id)?;
            render::print_form(controller.form());
        }
        ShellCommand::Set { field, value } => {
            let draft = controller.draft_mut()?;
            if let Err(e) = draft.set(field, &value.join(" ")) {
                eprintln!("{}", e.to_string().red());
            }
        }
        ShellCommand::Show => render::print_form(controller.form()),
        ShellCommand::Save => match controller.submit().await {
            Ok(job) => {
                println!("{}", "✓ Saved".green().bold());
                render::print_job_summary(&job);
            }
            Err(ControllerError::Validation(_)) => render::print_form(controller.form()),
            Err(e) => return Err(e),
        },
        ShellCommand::Cancel => controller.cancel(),
        ShellCommand::Delete { id } => {
            let question = match controller.state().find(&id) {
                Some(job) => format!("Delete {} at {}?", job.title, job.company),
                None => format!("Delete job {}?", id),
            };
            let outcome = controller
                .delete(&id, |_| prompt::confirm(&question).unwrap_or(false))
                .await?;
            if outcome == DeleteOutcome::Deleted {
                println!("{}", "✓ Deleted".green().bold());
            }
        }
        ShellCommand::Dismiss => controller.state().dismiss_error(),
    }

    Ok(())
}

/// Remote failures already sit in the banner; only local errors are printed here
fn report(err: &ControllerError) {
    if !matches!(err, ControllerError::Remote(_)) {
        eprintln!("{}", err.to_string().red());
    }
}

fn show_banner(controller: &JobListController<JobStoreClient>) {
    if let Some(failure) = controller.state().error() {
        render::print_banner(&failure);
    }
}

fn prompt_for(controller: &JobListController<JobStoreClient>) -> String {
    if controller.form().is_open() {
        "jobtrack (form)> ".to_string()
    } else {
        "jobtrack> ".to_string()
    }
}
