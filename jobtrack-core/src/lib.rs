//! Jobtrack Core
//!
//! Core types shared by every Jobtrack crate.
//!
//! This crate contains:
//! - Domain types: the job application record as the remote store returns it
//! - DTOs: request bodies sent to the remote store

pub mod domain;
pub mod dto;
pub mod serde_helpers;
