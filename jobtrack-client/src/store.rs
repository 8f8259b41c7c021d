//! The job store seam
//!
//! The controller only needs four operations from the remote store. They are
//! expressed as a trait so the controller can be driven by the HTTP client in
//! production and by in-memory fakes in tests.

use async_trait::async_trait;
use jobtrack_core::domain::job::{JobId, JobRecord};
use jobtrack_core::dto::job::JobPayload;

use crate::JobStoreClient;
use crate::error::Result;

/// Remote service of record for job applications
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<JobRecord>>;

    /// Store a new job and return it with its assigned `id`
    async fn create(&self, payload: &JobPayload) -> Result<JobRecord>;

    /// Replace the fields of job `id` and return the saved record
    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord>;

    /// Delete job `id`
    async fn delete(&self, id: &JobId) -> Result<()>;
}

#[async_trait]
impl JobStore for JobStoreClient {
    async fn list(&self) -> Result<Vec<JobRecord>> {
        self.list_jobs().await
    }

    async fn create(&self, payload: &JobPayload) -> Result<JobRecord> {
        self.create_job(payload).await
    }

    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord> {
        self.update_job(id, payload).await
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        self.delete_job(id).await
    }
}

#[async_trait]
impl<S: JobStore + ?Sized> JobStore for std::sync::Arc<S> {
    async fn list(&self) -> Result<Vec<JobRecord>> {
        (**self).list().await
    }

    async fn create(&self, payload: &JobPayload) -> Result<JobRecord> {
        (**self).create(payload).await
    }

    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        (**self).delete(id).await
    }
}
