//! Job endpoints of the remote job store
//!
//! | Operation | Method | Path        |
//! |-----------|--------|-------------|
//! | List      | GET    | `/jobs`     |
//! | Create    | POST   | `/jobs`     |
//! | Update    | PUT    | `/jobs/{id}`|
//! | Delete    | DELETE | `/jobs/{id}`|

use reqwest::header::ACCEPT;

use crate::JobStoreClient;
use crate::error::Result;
use jobtrack_core::domain::job::{JobId, JobRecord};
use jobtrack_core::dto::job::JobPayload;

const JSON: &str = "application/json";

impl JobStoreClient {
    /// List every job the store holds
    ///
    /// A `null` body is treated as an empty list.
    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        let url = self.endpoint(&["jobs"])?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).header(ACCEPT, JSON).send().await?;

        let jobs: Option<Vec<JobRecord>> = self.handle_response(response).await?;
        Ok(jobs.unwrap_or_default())
    }

    /// Create a job
    ///
    /// # Returns
    /// The stored record, carrying its newly assigned `id`
    ///
    /// # Example
    /// ```no_run
    /// # use jobtrack_client::JobStoreClient;
    /// # use jobtrack_core::domain::job::JobStatus;
    /// # use jobtrack_core::dto::job::JobPayload;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JobStoreClient::new("http://localhost:8080");
    /// let job = client.create_job(&JobPayload {
    ///     company: "Acme".to_string(),
    ///     title: "Engineer".to_string(),
    ///     status: JobStatus::Applied,
    ///     applied_date: None,
    ///     notes: String::new(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_job(&self, payload: &JobPayload) -> Result<JobRecord> {
        let url = self.endpoint(&["jobs"])?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON)
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Replace the editable fields of a job
    ///
    /// # Returns
    /// The record as the store saved it
    pub async fn update_job(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord> {
        let id = id.to_string();
        let url = self.endpoint(&["jobs", id.as_str()])?;
        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(url)
            .header(ACCEPT, JSON)
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a job. Any 2xx status counts as success; the body is ignored.
    pub async fn delete_job(&self, id: &JobId) -> Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["jobs", id.as_str()])?;
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).header(ACCEPT, JSON).send().await?;

        self.handle_empty_response(response).await
    }
}
