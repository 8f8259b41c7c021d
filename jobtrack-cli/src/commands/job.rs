//! Job command handlers
//!
//! One-shot list/add/edit/delete. Each command builds its own controller, so
//! edit and delete load the list first to find the record they act on.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use jobtrack_client::JobStoreClient;
use jobtrack_controller::{DeleteOutcome, Draft, JobListController};
use jobtrack_core::domain::job::{JobId, JobStatus};

use crate::prompt;
use crate::render;

/// Job fields settable from the command line
///
/// Unset fields keep the draft's value: blank/today for `add`, the current
/// record's value for `edit`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Position title
    #[arg(long)]
    pub title: Option<String>,

    /// applied, interview, offer or rejected
    #[arg(long)]
    pub status: Option<JobStatus>,

    /// Applied date (YYYY-MM-DD, empty to clear)
    #[arg(long)]
    pub date: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl FieldArgs {
    pub fn apply(self, draft: &mut Draft) {
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(date) = self.date {
            draft.applied_date = date;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
    }
}

pub async fn list_jobs(client: JobStoreClient, json: bool) -> Result<()> {
    let controller = JobListController::new(client);
    controller.load_all().await?;

    let jobs = controller.state().jobs();
    if json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        render::print_job_list(&jobs);
    }

    Ok(())
}

pub async fn add_job(client: JobStoreClient, fields: FieldArgs) -> Result<()> {
    let mut controller = JobListController::new(client);
    fields.apply(controller.open_for_create()?);

    let job = controller.submit().await?;

    println!("{}", "✓ Job application added".green().bold());
    println!();
    render::print_job_summary(&job);

    Ok(())
}

pub async fn edit_job(client: JobStoreClient, id: JobId, fields: FieldArgs) -> Result<()> {
    let mut controller = JobListController::new(client);
    controller.load_all().await?;
    fields.apply(controller.open_for_edit(&id)?);

    let job = controller.submit().await?;

    println!("{}", "✓ Job application updated".green().bold());
    println!();
    render::print_job_summary(&job);

    Ok(())
}

pub async fn delete_job(client: JobStoreClient, id: JobId, yes: bool) -> Result<()> {
    let controller = JobListController::new(client);
    controller.load_all().await?;

    let job = controller
        .state()
        .find(&id)
        .with_context(|| format!("No job with id {} in the job store", id))?;

    let question = format!("Delete {} at {}?", job.title, job.company);
    let outcome = controller
        .delete(&id, |_| yes || prompt::confirm(&question).unwrap_or(false))
        .await?;

    match outcome {
        DeleteOutcome::Deleted => println!("{}", "✓ Job application deleted".green().bold()),
        DeleteOutcome::Declined => println!("{}", "Cancelled.".dimmed()),
    }

    Ok(())
}
