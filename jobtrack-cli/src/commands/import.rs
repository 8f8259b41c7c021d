//! Email import
//!
//! Reads saved messages, keeps the ones that look like application mail and
//! sends each extracted job through the form session like a manual add.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use jobtrack_client::{JobStore, JobStoreClient};
use jobtrack_controller::{Draft, JobListController};
use jobtrack_core::dto::job::JobPayload;
use jobtrack_mail::{EmailMessage, extract_job, is_job_related};

pub async fn import_files(client: JobStoreClient, files: &[PathBuf], dry_run: bool) -> Result<()> {
    let mut payloads = Vec::new();
    for path in files {
        match read_payload(path) {
            Ok(Some(payload)) => payloads.push(payload),
            Ok(None) => println!("{} {}", "skip".dimmed(), path.display()),
            Err(e) => println!("{} {}: {:#}", "fail".red(), path.display(), e),
        }
    }

    if payloads.is_empty() {
        println!("{}", "No job applications found.".yellow());
        return Ok(());
    }

    if dry_run {
        println!("{}", format!("Would add {} job application(s):", payloads.len()).bold());
        println!();
        for payload in &payloads {
            crate::render::print_payload(payload);
        }
        return Ok(());
    }

    let mut controller = JobListController::new(client);
    let added = submit_all(&mut controller, &payloads).await?;

    println!();
    println!("{}", format!("Added {} job application(s)", added).bold());

    Ok(())
}

/// Create one job per payload, carrying on past rejected ones
///
/// Returns how many were created. The form is closed afterwards either way.
async fn submit_all<S: JobStore>(
    controller: &mut JobListController<S>,
    payloads: &[JobPayload],
) -> Result<usize> {
    let mut added = 0;
    for payload in payloads {
        *controller.open_for_create()? = draft_from_payload(payload);
        match controller.submit().await {
            Ok(job) => {
                added += 1;
                println!("{} {} at {}", "✓".green(), job.title, job.company);
            }
            Err(e) => {
                controller.cancel();
                println!("{} {} at {}: {}", "✗".red(), payload.title, payload.company, e);
            }
        }
    }
    Ok(added)
}

/// Parse one message file; `None` when it is not about a job application
fn read_payload(path: &Path) -> Result<Option<JobPayload>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let message = EmailMessage::parse(&raw)?;

    if !is_job_related(&message.subject) {
        tracing::debug!("Skipping unrelated message '{}'", message.subject);
        return Ok(None);
    }

    Ok(extract_job(&message))
}

fn draft_from_payload(payload: &JobPayload) -> Draft {
    Draft {
        company: payload.company.clone(),
        title: payload.title.clone(),
        status: payload.status.clone(),
        applied_date: payload
            .applied_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        notes: payload.notes.clone(),
    }
}
