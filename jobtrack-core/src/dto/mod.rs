//! Data Transfer Objects sent to the remote job store

pub mod job;
