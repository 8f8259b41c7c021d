//! Job extraction from application emails
//!
//! Heuristic: try the subject first, fall back to the body line by line.

use jobtrack_core::domain::job::JobStatus;
use jobtrack_core::dto::job::JobPayload;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::EmailMessage;

const UNKNOWN_COMPANY: &str = "Unknown Company";
const UNKNOWN_TITLE: &str = "Unknown Position";

const JOB_KEYWORDS: [&str; 3] = ["application", "thank you for apply", "next step"];

const COMMON_TITLES: [&str; 17] = [
    "software engineer",
    "software developer",
    "backend developer",
    "developer",
    "programmer",
    "business analyst",
    "analyst",
    "manager",
    "director",
    "consultant",
    "specialist",
    "coordinator",
    "associate",
    "senior",
    "junior",
    "intern",
    "architect",
];

static RE_SUBJECT_COMPANY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)from\s+([A-Za-z\s&.]+?)(?:\s+team|\s+careers|\s+hiring|$)",
        r"(?i)at\s+([A-Za-z\s&.]+?)(?:\s+team|\s+careers|\s+-|$)",
        r"(?i)([A-Za-z\s&.]+?)\s+(?:team|careers|hiring|hr)",
        r"(?i)^([A-Za-z\s&.]+?)\s+(?:-|:)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static RE_BODY_COMPANY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)from\s+([A-Za-z\s&.]+?)\s+team",
        r"(?i)at\s+([A-Za-z\s&.]+?)[,.]",
        r"(?i)([A-Za-z\s&.]+?)\s+careers",
        r"(?i)([A-Za-z\s&.]+?)\s+hiring",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static RE_SUBJECT_TITLE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)for\s+the\s+([^-]+?)(?:\s+position|\s+role)",
        r"(?i)position:\s+([^-\n]+?)(?:\s+at|\s+-|$)",
        r"(?i)role:\s+([^-\n]+?)(?:\s+at|\s+-|$)",
        r"(?i)([A-Za-z\s]+?)\s+position",
        r"(?i)([A-Za-z\s]+?)\s+role",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static RE_BODY_TITLE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)position:\s+([^,\n]+)",
        r"(?i)role:\s+([^,\n]+)",
        r"(?i)for\s+the\s+([^,\n]+?)\s+position",
        r"(?i)([A-Za-z\s]+?)\s+position",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Whether the subject looks like part of an application conversation
pub fn is_job_related(subject: &str) -> bool {
    let subject = subject.to_lowercase();
    JOB_KEYWORDS.iter().any(|keyword| subject.contains(keyword))
}

/// Build a job payload from an email
///
/// Returns `None` when neither a company nor a title can be found. A missing
/// one of the two is filled with a placeholder so the record still passes
/// the presence checks. The subject is kept as the job's notes.
pub fn extract_job(message: &EmailMessage) -> Option<JobPayload> {
    let company = extract_company(&message.subject, &message.body);
    let title = extract_title(&message.subject, &message.body);

    if company.is_none() && title.is_none() {
        tracing::debug!("No job details found in '{}'", message.subject);
        return None;
    }

    Some(JobPayload {
        company: company.unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        status: status_from_subject(&message.subject),
        applied_date: message.date,
        notes: message.subject.clone(),
    })
}

fn extract_company(subject: &str, body: &str) -> Option<String> {
    company_from_subject(subject).or_else(|| first_capture_by_line(&RE_BODY_COMPANY, body, 50))
}

fn extract_title(subject: &str, body: &str) -> Option<String> {
    title_from_subject(subject).or_else(|| first_capture_by_line(&RE_BODY_TITLE, body, 100))
}

fn company_from_subject(subject: &str) -> Option<String> {
    if let Some(company) = first_capture(&RE_SUBJECT_COMPANY, subject, 50) {
        return Some(company);
    }

    // "Thank you for your application - Acme Team": the word before "team"
    if subject
        .to_lowercase()
        .contains("thank you for your application")
    {
        let words: Vec<&str> = subject.split_whitespace().collect();
        if let Some(pos) = words
            .iter()
            .position(|word| word.eq_ignore_ascii_case("team"))
            .filter(|pos| *pos > 0)
        {
            return Some(words[pos - 1].to_string());
        }
    }

    None
}

fn title_from_subject(subject: &str) -> Option<String> {
    if let Some(title) = first_capture(&RE_SUBJECT_TITLE, subject, 100) {
        return Some(title);
    }

    let subject = subject.to_lowercase();
    COMMON_TITLES
        .iter()
        .find(|title| subject.contains(*title))
        .map(|title| title.to_string())
}

/// First pattern whose trimmed capture is between 2 and `max_len - 1` chars
fn first_capture(patterns: &[Regex], text: &str, max_len: usize) -> Option<String> {
    patterns.iter().find_map(|re| {
        let captured = re.captures(text)?.get(1)?.as_str().trim();
        let len = captured.chars().count();
        (len > 1 && len < max_len).then(|| captured.to_string())
    })
}

fn first_capture_by_line(patterns: &[Regex], body: &str, max_len: usize) -> Option<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find_map(|line| first_capture(patterns, line, max_len))
}

fn status_from_subject(subject: &str) -> JobStatus {
    let subject = subject.to_lowercase();

    if subject.contains("interview") {
        JobStatus::Interview
    } else if subject.contains("offer") || subject.contains("congratulations") {
        JobStatus::Offer
    } else if subject.contains("reject") || subject.contains("unfortunately") {
        JobStatus::Rejected
    } else {
        JobStatus::Applied
    }
}
