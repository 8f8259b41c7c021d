//! Controller error taxonomy
//!
//! Two kinds of failure reach the user:
//! - [`ValidationError`]: caught before submission, shown inline in the form
//! - [`RemoteFailure`]: the store rejected the call or could not be reached,
//!   shown as a dismissible banner

use std::fmt;

use jobtrack_client::ClientError;
use thiserror::Error;

/// Draft rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in company and title fields (company is empty)")]
    MissingCompany,
    #[error("Please fill in company and title fields (title is empty)")]
    MissingTitle,
    #[error("Applied date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Which sync operation a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Load,
    Create,
    Update,
    Remove,
}

impl SyncAction {
    fn failure_prefix(&self) -> &'static str {
        match self {
            SyncAction::Load => "Failed to fetch jobs",
            SyncAction::Create | SyncAction::Update => "Failed to save job",
            SyncAction::Remove => "Failed to delete job",
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncAction::Load => "load",
            SyncAction::Create => "create",
            SyncAction::Update => "update",
            SyncAction::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// The store was unreachable or rejected the request
///
/// Every non-2xx status, transport error and undecodable body ends up here.
/// There is no retry; the user re-triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {diagnostic}", .action.failure_prefix())]
pub struct RemoteFailure {
    pub action: SyncAction,
    /// HTTP status, when the store answered
    pub status: Option<u16>,
    pub diagnostic: String,
}

impl RemoteFailure {
    pub fn from_client(action: SyncAction, err: &ClientError) -> Self {
        Self {
            action,
            status: err.status(),
            diagnostic: err.to_string(),
        }
    }
}

/// Errors returned by [`crate::JobListController`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteFailure),

    #[error("the form is already open")]
    FormAlreadyOpen,

    #[error("the form is not open")]
    FormClosed,

    #[error("job has no id yet and cannot be edited")]
    MissingId,

    #[error("no job with id {0} in the current list")]
    UnknownJob(String),
}
