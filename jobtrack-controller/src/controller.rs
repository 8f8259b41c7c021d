//! Job list controller
//!
//! Owns the state store (through the sync engine) and the form session, and
//! exposes the operations a presentation layer triggers.

use jobtrack_client::JobStore;
use jobtrack_core::domain::job::{JobId, JobRecord};
use tracing::debug;

use crate::error::ControllerError;
use crate::form::{Draft, FormMode, FormSession};
use crate::state::StateStore;
use crate::sync::SyncEngine;

/// Result of a delete request that reached the confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user said no; nothing was sent
    Declined,
}

pub struct JobListController<S> {
    sync: SyncEngine<S>,
    form: FormSession,
}

impl<S: JobStore> JobListController<S> {
    pub fn new(store: S) -> Self {
        Self::with_form(store, FormSession::new())
    }

    pub fn with_form(store: S, form: FormSession) -> Self {
        Self {
            sync: SyncEngine::new(store, StateStore::new()),
            form,
        }
    }

    pub fn state(&self) -> &StateStore {
        self.sync.state()
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Result<&mut Draft, ControllerError> {
        self.form.draft_mut()
    }

    /// Refresh the list from the store
    pub async fn load_all(&self) -> Result<(), ControllerError> {
        Ok(self.sync.load_all().await?)
    }

    pub fn open_for_create(&mut self) -> Result<&mut Draft, ControllerError> {
        self.form.open_for_create()
    }

    /// Open the form on a copy of the listed record with `id`
    pub fn open_for_edit(&mut self, id: &JobId) -> Result<&mut Draft, ControllerError> {
        let record = self
            .state()
            .find(id)
            .ok_or_else(|| ControllerError::UnknownJob(id.to_string()))?;
        self.form.open_for_edit(&record)
    }

    /// Close the form without saving and clear the error banner
    pub fn cancel(&mut self) {
        self.form.cancel();
        self.state().dismiss_error();
    }

    /// Validate the draft and send it
    ///
    /// A validation failure returns before any request is made. A remote
    /// failure leaves the form open with the draft intact so the user can
    /// retry. On success the form closes as if cancelled.
    pub async fn submit(&mut self) -> Result<JobRecord, ControllerError> {
        let (mode, payload) = self.form.prepare_submit()?;

        let saved = match &mode {
            FormMode::Create => self.sync.create(&payload).await?,
            FormMode::Edit(id) => self.sync.update(id, &payload).await?,
        };

        debug!("Submit succeeded ({:?}), closing form", mode);
        self.cancel();
        Ok(saved)
    }

    /// Delete job `id` once `confirm` agrees
    ///
    /// A declined confirmation is a silent no-op: no request, no error.
    pub async fn delete(
        &self,
        id: &JobId,
        confirm: impl FnOnce(&JobId) -> bool,
    ) -> Result<DeleteOutcome, ControllerError> {
        if !confirm(id) {
            debug!("Delete of job {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        self.sync.remove(id).await?;
        Ok(DeleteOutcome::Deleted)
    }
}
