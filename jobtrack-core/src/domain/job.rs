//! Job application domain types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::serde_helpers::{blank_date, blank_string};

/// Identifier assigned by the remote job store
///
/// Opaque to the client. The reference store hands out integers, but any
/// string identifier is carried through untouched and written back in the
/// shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(u64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{}", n),
            JobId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for JobId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u64>() {
            Ok(n) => JobId::Number(n),
            Err(_) => JobId::Text(s.to_string()),
        })
    }
}

impl From<u64> for JobId {
    fn from(n: u64) -> Self {
        JobId::Number(n)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        JobId::Text(s.to_string())
    }
}

/// Where an application currently stands
///
/// The store keeps status as free text, so decoding never fails: a blank or
/// missing status reads as `Applied`, known values match case-insensitively,
/// and anything else is carried through as `Other` and written back as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    Other(String),
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
            JobStatus::Other(raw) => raw,
        }
    }

    /// Lenient reading of a stored status
    pub fn from_wire(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return JobStatus::Applied;
        }
        raw.parse()
            .unwrap_or_else(|_| JobStatus::Other(raw.to_string()))
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JobStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(JobStatus::from_wire).unwrap_or_default())
    }
}

/// Returned when a status string is not one of the four known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}' (expected applied, interview, offer or rejected)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A tracked job application as held by the remote job store
///
/// Decoding is lenient: the store may hold records written by other tools, so
/// missing fields fall back to their defaults rather than failing the whole
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JobId>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, alias = "appled_date", with = "blank_date")]
    pub applied_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_string::deserialize")]
    pub notes: Option<String>,
}

impl JobRecord {
    /// Whether this record carries the given store identifier
    pub fn has_id(&self, id: &JobId) -> bool {
        self.id.as_ref() == Some(id)
    }
}
