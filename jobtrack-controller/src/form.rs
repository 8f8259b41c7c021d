//! Form session
//!
//! A two-state machine around the edit form:
//!
//! ```text
//! Closed --open_for_create--> Open(Create)
//! Closed --open_for_edit----> Open(Edit(id))
//! Open(*) --cancel / successful submit--> Closed
//! ```
//!
//! The draft is a value copy of the editable fields. It is never aliased to a
//! record in the state store and only reaches the store through a successful
//! sync call.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use jobtrack_core::domain::job::{JobId, JobRecord, JobStatus, UnknownStatus};
use jobtrack_core::dto::job::JobPayload;
use jobtrack_core::serde_helpers::blank_date;

use crate::error::{ControllerError, ValidationError};

/// Source of "today" for new drafts
pub type Clock = fn() -> NaiveDate;

/// Local calendar date
///
/// Taken from the machine's local time zone; a draft opened just before
/// midnight may carry a date the remote store considers yesterday or tomorrow.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// What a submit will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(JobId),
}

/// Unsaved working copy of a job's editable fields
///
/// Text fields are kept exactly as entered; blank optional fields are empty
/// strings rather than absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    pub applied_date: String,
    pub notes: String,
}

impl Draft {
    /// Empty draft for a new application dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            company: String::new(),
            title: String::new(),
            status: JobStatus::Applied,
            applied_date: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
        }
    }

    /// Copy of a record's current field values
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            company: record.company.clone(),
            title: record.title.clone(),
            status: record.status.clone(),
            applied_date: record
                .applied_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    /// Set one field from user input
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), UnknownStatus> {
        match field {
            DraftField::Company => self.company = value.to_string(),
            DraftField::Title => self.title = value.to_string(),
            DraftField::Status => self.status = value.parse()?,
            DraftField::AppliedDate => self.applied_date = value.to_string(),
            DraftField::Notes => self.notes = value.to_string(),
        }
        Ok(())
    }

    /// Check presence of company and title and build the request body
    pub fn validate(&self) -> Result<JobPayload, ValidationError> {
        let company = self.company.trim();
        if company.is_empty() {
            return Err(ValidationError::MissingCompany);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let applied_date = match self.applied_date.trim() {
            "" => None,
            raw => Some(
                blank_date::parse(raw)
                    .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
            ),
        };

        Ok(JobPayload {
            company: company.to_string(),
            title: title.to_string(),
            status: self.status.clone(),
            applied_date,
            notes: self.notes.clone(),
        })
    }
}

/// Editable draft fields, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Company,
    Title,
    Status,
    AppliedDate,
    Notes,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" => Ok(DraftField::Company),
            "title" => Ok(DraftField::Title),
            "status" => Ok(DraftField::Status),
            "date" | "applied_date" => Ok(DraftField::AppliedDate),
            "notes" => Ok(DraftField::Notes),
            other => Err(format!(
                "unknown field '{}' (expected company, title, status, date or notes)",
                other
            )),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Company => "company",
            DraftField::Title => "title",
            DraftField::Status => "status",
            DraftField::AppliedDate => "date",
            DraftField::Notes => "notes",
        };
        f.write_str(name)
    }
}

/// Create/edit form state
#[derive(Debug, Clone)]
pub struct FormSession {
    mode: Option<FormMode>,
    draft: Draft,
    validation: Option<ValidationError>,
    clock: Clock,
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            mode: None,
            draft: Draft::blank(clock()),
            validation: None,
            clock,
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    /// `None` while closed
    pub fn mode(&self) -> Option<&FormMode> {
        self.mode.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> Result<&mut Draft, ControllerError> {
        if self.mode.is_none() {
            return Err(ControllerError::FormClosed);
        }
        Ok(&mut self.draft)
    }

    /// Failure from the last submit attempt, for inline display
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation.as_ref()
    }

    /// Closed -> Open(Create) with a blank draft dated today
    pub fn open_for_create(&mut self) -> Result<&mut Draft, ControllerError> {
        self.open(FormMode::Create, Draft::blank((self.clock)()))
    }

    /// Closed -> Open(Edit(record.id)) with the draft seeded from `record`
    pub fn open_for_edit(&mut self, record: &JobRecord) -> Result<&mut Draft, ControllerError> {
        let id = record.id.clone().ok_or(ControllerError::MissingId)?;
        self.open(FormMode::Edit(id), Draft::from_record(record))
    }

    fn open(&mut self, mode: FormMode, draft: Draft) -> Result<&mut Draft, ControllerError> {
        if self.mode.is_some() {
            return Err(ControllerError::FormAlreadyOpen);
        }
        self.mode = Some(mode);
        self.draft = draft;
        self.validation = None;
        Ok(&mut self.draft)
    }

    /// Open(*) -> Closed, discarding the draft
    pub fn cancel(&mut self) {
        self.mode = None;
        self.draft = Draft::blank((self.clock)());
        self.validation = None;
    }

    /// Validate the draft for submission
    ///
    /// The form stays open either way; the caller closes it with
    /// [`FormSession::cancel`] once the store has accepted the request.
    pub fn prepare_submit(&mut self) -> Result<(FormMode, JobPayload), ControllerError> {
        let mode = self.mode.clone().ok_or(ControllerError::FormClosed)?;
        match self.draft.validate() {
            Ok(payload) => {
                self.validation = None;
                Ok((mode, payload))
            }
            Err(err) => {
                self.validation = Some(err.clone());
                Err(err.into())
            }
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_open_for_create_defaults() {
        let mut form = FormSession::with_clock(fixed_today);
        let draft = form.open_for_create().unwrap().clone();

        assert_eq!(form.mode(), Some(&FormMode::Create));
        assert_eq!(draft.status, JobStatus::Applied);
        assert_eq!(draft.applied_date, "2024-06-15");
        assert!(draft.company.is_empty());
        assert!(draft.title.is_empty());
        assert!(draft.notes.is_empty());
    }

    #[test]
    fn test_open_for_edit_copies_record() {
        let mut job = record(3, "Acme", "Eng");
        job.status = JobStatus::Offer;
        let mut form = FormSession::with_clock(fixed_today);

        let draft = form.open_for_edit(&job).unwrap();
        assert_eq!(draft.company, "Acme");
        assert_eq!(draft.status, JobStatus::Offer);
        assert_eq!(draft.applied_date, "");
        assert_eq!(draft.notes, "");

        draft.company = "Changed".to_string();
        assert_eq!(job.company, "Acme");
        assert_eq!(form.mode(), Some(&FormMode::Edit(JobId::Number(3))));
    }

    #[test]
    fn test_open_twice_is_rejected() {
        let mut form = FormSession::with_clock(fixed_today);
        form.open_for_create().unwrap();

        assert_eq!(
            form.open_for_edit(&record(1, "A", "B")).unwrap_err(),
            ControllerError::FormAlreadyOpen
        );
        assert_eq!(form.mode(), Some(&FormMode::Create));
    }

    #[test]
    fn test_edit_requires_id() {
        let mut job = record(1, "A", "B");
        job.id = None;
        let mut form = FormSession::with_clock(fixed_today);

        assert_eq!(form.open_for_edit(&job).unwrap_err(), ControllerError::MissingId);
        assert!(!form.is_open());
    }

    #[test]
    fn test_cancel_resets_to_create_defaults() {
        let mut form = FormSession::with_clock(fixed_today);
        form.open_for_edit(&record(1, "Acme", "Eng")).unwrap();
        form.cancel();

        assert!(!form.is_open());
        assert_eq!(form.draft(), &Draft::blank(fixed_today()));
        assert_eq!(form.draft_mut().unwrap_err(), ControllerError::FormClosed);
    }

    #[test]
    fn test_validation_requires_company_and_title() {
        let mut draft = Draft::blank(fixed_today());
        draft.title = "Eng".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingCompany));

        draft.company = "Acme".to_string();
        draft.title = " \t ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        draft.title = "  Eng ".to_string();
        let payload = draft.validate().unwrap();
        assert_eq!(payload.title, "Eng");
        assert_eq!(payload.applied_date, Some(fixed_today()));
    }

    #[test]
    fn test_validation_of_dates() {
        let mut draft = Draft::blank(fixed_today());
        draft.company = "Acme".to_string();
        draft.title = "Eng".to_string();

        draft.applied_date = String::new();
        assert_eq!(draft.validate().unwrap().applied_date, None);

        draft.applied_date = "15/06/2024".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidDate("15/06/2024".to_string()))
        );
    }

    #[test]
    fn test_prepare_submit_keeps_form_open_on_failure() {
        let mut form = FormSession::with_clock(fixed_today);
        form.open_for_create().unwrap();

        let err = form.prepare_submit().unwrap_err();
        assert_eq!(err, ControllerError::Validation(ValidationError::MissingCompany));
        assert!(form.is_open());
        assert_eq!(form.validation_error(), Some(&ValidationError::MissingCompany));

        form.draft_mut().unwrap().company = "Acme".to_string();
        form.draft_mut().unwrap().title = "Eng".to_string();
        let (mode, payload) = form.prepare_submit().unwrap();
        assert_eq!(mode, FormMode::Create);
        assert_eq!(payload.company, "Acme");
        assert!(form.validation_error().is_none());
    }

    #[test]
    fn test_prepare_submit_when_closed() {
        let mut form = FormSession::with_clock(fixed_today);
        assert_eq!(form.prepare_submit().unwrap_err(), ControllerError::FormClosed);
    }

    #[test]
    fn test_set_fields_by_name() {
        let mut draft = Draft::blank(fixed_today());
        draft.set("company".parse().unwrap(), "Acme").unwrap();
        draft.set("status".parse().unwrap(), "interview").unwrap();
        draft.set("date".parse().unwrap(), "").unwrap();

        assert_eq!(draft.company, "Acme");
        assert_eq!(draft.status, JobStatus::Interview);
        assert_eq!(draft.applied_date, "");
        assert!(draft.set(DraftField::Status, "hired").is_err());
        assert!("salary".parse::<DraftField>().is_err());
    }
}
