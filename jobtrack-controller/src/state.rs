//! State store
//!
//! Holds the canonical job list, at most one error message and the busy flag.
//! The list and the error slot are only ever replaced wholesale, and only by
//! the sync engine's completion handlers (plus banner dismissal and form
//! cancel, which clear the error).
//!
//! Observers subscribe to a `tokio::sync::watch` channel and receive whole
//! [`ViewState`] snapshots.

use std::sync::Arc;

use jobtrack_core::domain::job::{JobId, JobRecord};
use tokio::sync::watch;

use crate::error::RemoteFailure;

/// Snapshot of everything a presentation layer renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub jobs: Vec<JobRecord>,
    pub error: Option<RemoteFailure>,
    in_flight: usize,
}

impl ViewState {
    /// True while at least one request is outstanding. Advisory only.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub(crate) fn replace_jobs(&mut self, jobs: Vec<JobRecord>) {
        self.jobs = jobs;
    }

    pub(crate) fn append_job(&mut self, job: JobRecord) {
        let mut jobs = Vec::with_capacity(self.jobs.len() + 1);
        jobs.extend(self.jobs.iter().cloned());
        jobs.push(job);
        self.jobs = jobs;
    }

    /// Swap in `job` for the record with `id`. Returns false if no record matched.
    pub(crate) fn replace_job(&mut self, id: &JobId, job: &JobRecord) -> bool {
        if !self.jobs.iter().any(|existing| existing.has_id(id)) {
            return false;
        }
        self.jobs = self
            .jobs
            .iter()
            .map(|existing| {
                if existing.has_id(id) {
                    job.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        true
    }

    /// Drop the record with `id`. Returns false if no record matched.
    pub(crate) fn remove_job(&mut self, id: &JobId) -> bool {
        let before = self.jobs.len();
        let jobs: Vec<JobRecord> = self
            .jobs
            .iter()
            .filter(|existing| !existing.has_id(id))
            .cloned()
            .collect();
        let removed = jobs.len() != before;
        self.jobs = jobs;
        removed
    }
}

/// Shared handle to the view state
///
/// Cloning the handle shares the same state.
#[derive(Debug, Clone)]
pub struct StateStore {
    tx: Arc<watch::Sender<ViewState>>,
}

impl StateStore {
    /// Empty list, no error, not busy
    pub fn new() -> Self {
        Self::with_jobs(Vec::new())
    }

    /// Start from an existing list
    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        let (tx, _rx) = watch::channel(ViewState {
            jobs,
            ..ViewState::default()
        });
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub fn jobs(&self) -> Vec<JobRecord> {
        self.tx.borrow().jobs.clone()
    }

    /// Look up a record by id, returning an independent copy
    pub fn find(&self, id: &JobId) -> Option<JobRecord> {
        self.tx.borrow().jobs.iter().find(|job| job.has_id(id)).cloned()
    }

    pub fn error(&self) -> Option<RemoteFailure> {
        self.tx.borrow().error.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.tx.borrow().is_busy()
    }

    /// Receive a fresh snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// Close the error banner
    pub fn dismiss_error(&self) {
        self.tx.send_if_modified(|state| state.error.take().is_some());
    }

    /// Mark a request as in flight and clear the previous error
    pub(crate) fn begin_request(&self) {
        self.tx.send_modify(|state| {
            state.in_flight += 1;
            state.error = None;
        });
    }

    /// Apply a request's outcome and release its busy mark in one update
    pub(crate) fn settle(&self, apply: impl FnOnce(&mut ViewState)) {
        self.tx.send_modify(|state| {
            apply(state);
            state.in_flight = state.in_flight.saturating_sub(1);
        });
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
