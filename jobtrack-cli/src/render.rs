//! Terminal rendering of jobs, drafts and failures

use colored::*;
use jobtrack_controller::{FormMode, FormSession, RemoteFailure};
use jobtrack_core::domain::job::{JobRecord, JobStatus};
use jobtrack_core::dto::job::JobPayload;

/// Print a list of jobs, or a notice when there are none
pub fn print_job_list(jobs: &[JobRecord]) {
    if jobs.is_empty() {
        println!("{}", "No job applications yet.".yellow());
        return;
    }

    println!("{}", format!("Found {} job application(s):", jobs.len()).bold());
    println!();
    for job in jobs {
        print_job_summary(job);
    }
}

/// Print a job summary
pub fn print_job_summary(job: &JobRecord) {
    let id = job
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("  {} {} {}", "▸".cyan(), job.title.bold(), format!("#{}", id).dimmed());
    println!("    Company: {}", job.company);
    println!("    Status:  {}", colorize_status(&job.status));
    if let Some(date) = job.applied_date {
        println!("    Applied: {}", date.format("%Y-%m-%d").to_string().dimmed());
    }
    if let Some(notes) = &job.notes {
        println!("    Notes:   {}", notes.dimmed());
    }
    println!();
}

/// Print a payload that has not been sent yet
pub fn print_payload(payload: &JobPayload) {
    println!("  {} {}", "▸".cyan(), payload.title.bold());
    println!("    Company: {}", payload.company);
    println!("    Status:  {}", colorize_status(&payload.status));
    if let Some(date) = payload.applied_date {
        println!("    Applied: {}", date.format("%Y-%m-%d").to_string().dimmed());
    }
    if !payload.notes.is_empty() {
        println!("    Notes:   {}", payload.notes.dimmed());
    }
    println!();
}

/// Print the open form: mode, draft fields and the inline validation message
pub fn print_form(form: &FormSession) {
    let Some(mode) = form.mode() else {
        println!("{}", "No form open. Use 'new' or 'edit <id>'.".dimmed());
        return;
    };

    let heading = match mode {
        FormMode::Create => "New job".to_string(),
        FormMode::Edit(id) => format!("Editing job #{}", id),
    };
    let draft = form.draft();

    println!("{}", heading.bold());
    println!("  company: {}", draft.company);
    println!("  title:   {}", draft.title);
    println!("  status:  {}", colorize_status(&draft.status));
    println!("  date:    {}", draft.applied_date);
    println!("  notes:   {}", draft.notes);
    if let Some(err) = form.validation_error() {
        println!("  {}", err.to_string().red());
    }
}

/// Print the dismissible error banner
pub fn print_banner(failure: &RemoteFailure) {
    println!("{} {}", "!".red().bold(), failure.to_string().red());
}

pub fn colorize_status(status: &JobStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        JobStatus::Applied => status_str.blue(),
        JobStatus::Interview => status_str.yellow(),
        JobStatus::Offer => status_str.green(),
        JobStatus::Rejected => status_str.red(),
        JobStatus::Other(_) => status_str.normal(),
    }
}
