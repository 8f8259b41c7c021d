//! Sync engine
//!
//! Each operation marks the state busy, clears the previous error, performs
//! exactly one call against the job store and then reconciles the outcome
//! into the state store:
//!
//! | Operation  | On success                                  |
//! |------------|---------------------------------------------|
//! | `load_all` | list replaced by the fetched set            |
//! | `create`   | returned record appended                    |
//! | `update`   | matching record replaced, others untouched  |
//! | `remove`   | matching record dropped                     |
//!
//! On failure the list is left as it was and the error slot is set. The
//! outcome is applied to whatever the list looks like when the response
//! arrives; overlapping operations resolve last-write-wins.

use jobtrack_client::JobStore;
use jobtrack_core::domain::job::{JobId, JobRecord};
use jobtrack_core::dto::job::JobPayload;
use tracing::{debug, info, warn};

use crate::error::{RemoteFailure, SyncAction};
use crate::state::{StateStore, ViewState};

/// Issues requests to the job store and mirrors results into the state store
pub struct SyncEngine<S> {
    store: S,
    state: StateStore,
}

impl<S: JobStore> SyncEngine<S> {
    pub fn new(store: S, state: StateStore) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &StateStore {
        &self.state
    }

    /// Replace the local list with the store's full collection
    pub async fn load_all(&self) -> Result<(), RemoteFailure> {
        self.state.begin_request();
        let outcome = self.store.list().await;

        self.settle(SyncAction::Load, outcome, |state, jobs: &Vec<JobRecord>| {
            info!("Loaded {} job(s)", jobs.len());
            state.replace_jobs(jobs.clone());
        })
        .map(|_| ())
    }

    /// Create a job and append the stored record to the list
    pub async fn create(&self, payload: &JobPayload) -> Result<JobRecord, RemoteFailure> {
        self.state.begin_request();
        let outcome = self.store.create(payload).await;

        self.settle(SyncAction::Create, outcome, |state, job: &JobRecord| {
            info!("Created job {} at {}", job.title, job.company);
            state.append_job(job.clone());
        })
    }

    /// Update job `id` and swap the stored record into the list
    ///
    /// If the list no longer holds `id` the returned record is not inserted;
    /// that case is not an error.
    pub async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord, RemoteFailure> {
        self.state.begin_request();
        let outcome = self.store.update(id, payload).await;

        self.settle(SyncAction::Update, outcome, |state, job: &JobRecord| {
            if state.replace_job(id, job) {
                info!("Updated job {}", id);
            } else {
                debug!("Updated job {} is not in the local list; leaving list as is", id);
            }
        })
    }

    /// Delete job `id` and drop it from the list
    ///
    /// Callers must have obtained the user's confirmation first.
    pub async fn remove(&self, id: &JobId) -> Result<(), RemoteFailure> {
        self.state.begin_request();
        let outcome = self.store.delete(id).await;

        self.settle(SyncAction::Remove, outcome, |state, _: &()| {
            if state.remove_job(id) {
                info!("Deleted job {}", id);
            } else {
                debug!("Deleted job {} was not in the local list", id);
            }
        })
    }

    fn settle<T>(
        &self,
        action: SyncAction,
        outcome: jobtrack_client::Result<T>,
        apply: impl FnOnce(&mut ViewState, &T),
    ) -> Result<T, RemoteFailure> {
        match outcome {
            Ok(value) => {
                self.state.settle(|state| apply(state, &value));
                Ok(value)
            }
            Err(err) => {
                let failure = RemoteFailure::from_client(action, &err);
                warn!("{} failed: {}", action, err);
                self.state.settle(|state| state.error = Some(failure.clone()));
                Err(failure)
            }
        }
    }
}
