//! Job DTOs sent to the remote job store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;
use crate::serde_helpers::blank_date;

/// Body of a create or update request
///
/// Carries the editable fields only; the identifier travels in the URL.
/// Absent dates and notes are sent as empty strings, which is what the
/// store's own form inputs produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPayload {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    #[serde(default, with = "blank_date")]
    pub applied_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}
