//! Core domain types
//!
//! These types mirror what the remote job store holds. They are produced by the
//! client when decoding responses and owned by the controller's state store.

pub mod job;
