//! Jobtrack Controller
//!
//! Client-side state for the job application list, kept in sync with the
//! remote job store.
//!
//! Architecture:
//! - State Store: the canonical in-memory list, the error banner and the busy flag
//! - Sync Engine: one request per operation, results reconciled into the state store
//! - Form Session: create/edit draft with validation before anything is sent
//!
//! [`JobListController`] composes the three and is what a presentation layer
//! drives.

pub mod controller;
pub mod error;
pub mod form;
pub mod state;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{DeleteOutcome, JobListController};
pub use error::{ControllerError, RemoteFailure, SyncAction, ValidationError};
pub use form::{Draft, DraftField, FormMode, FormSession};
pub use state::{StateStore, ViewState};
pub use sync::SyncEngine;
