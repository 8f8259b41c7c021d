//! In-memory job store for controller tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobtrack_client::{ClientError, JobStore, Result};
use jobtrack_core::domain::job::{JobId, JobRecord, JobStatus};
use jobtrack_core::dto::job::JobPayload;
use tokio::sync::Notify;

pub fn record(id: u64, company: &str, title: &str) -> JobRecord {
    JobRecord {
        id: Some(JobId::Number(id)),
        company: company.to_string(),
        title: title.to_string(),
        status: JobStatus::Applied,
        applied_date: None,
        notes: None,
    }
}

pub fn payload(company: &str, title: &str, status: JobStatus) -> JobPayload {
    JobPayload {
        company: company.to_string(),
        title: title.to_string(),
        status,
        applied_date: None,
        notes: String::new(),
    }
}

/// A request the fake received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(JobPayload),
    Update(JobId, JobPayload),
    Delete(JobId),
}

#[derive(Default)]
struct Inner {
    jobs: Vec<JobRecord>,
    next_id: u64,
    calls: Vec<Call>,
    fail_with: Option<u16>,
    list_gate: Option<Arc<Notify>>,
}

/// Behaves like the reference store: sequential integer ids, 404 on unknown update
#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<Inner>>,
}

impl FakeStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().next_id = 1;
        store
    }

    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.next_id = jobs.len() as u64 + 1;
            inner.jobs = jobs;
        }
        store
    }

    /// Answer every following request with this status
    pub fn fail_with(&self, status: u16) {
        self.inner.lock().unwrap().fail_with = Some(status);
    }

    pub fn recover(&self) {
        self.inner.lock().unwrap().fail_with = None;
    }

    /// Hold list responses until the returned handle is notified
    pub fn hold_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.inner.lock().unwrap().list_gate = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn remote_jobs(&self) -> Vec<JobRecord> {
        self.inner.lock().unwrap().jobs.clone()
    }

    fn begin(&self, call: Call) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        match inner.fail_with {
            Some(status) => Err(ClientError::api_error(status, "injected failure")),
            None => Ok(()),
        }
    }
}

fn to_record(id: JobId, payload: &JobPayload) -> JobRecord {
    JobRecord {
        id: Some(id),
        company: payload.company.clone(),
        title: payload.title.clone(),
        status: payload.status.clone(),
        applied_date: payload.applied_date,
        notes: Some(payload.notes.clone()).filter(|notes| !notes.is_empty()),
    }
}

#[async_trait]
impl JobStore for FakeStore {
    async fn list(&self) -> Result<Vec<JobRecord>> {
        self.begin(Call::List)?;
        // Snapshot first so a held response reflects the store at request time
        let (jobs, gate) = {
            let inner = self.inner.lock().unwrap();
            (inner.jobs.clone(), inner.list_gate.clone())
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(jobs)
    }

    async fn create(&self, payload: &JobPayload) -> Result<JobRecord> {
        self.begin(Call::Create(payload.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        let id = JobId::Number(inner.next_id);
        inner.next_id += 1;
        let created = to_record(id, payload);
        inner.jobs.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobRecord> {
        self.begin(Call::Update(id.clone(), payload.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        let updated = to_record(id.clone(), payload);
        match inner.jobs.iter_mut().find(|job| job.has_id(id)) {
            Some(job) => *job = updated.clone(),
            // The remote may still know a record the local list has lost track of
            None => inner.jobs.push(updated.clone()),
        }
        Ok(updated)
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        self.begin(Call::Delete(id.clone()))?;
        self.inner.lock().unwrap().jobs.retain(|job| !job.has_id(id));
        Ok(())
    }
}
