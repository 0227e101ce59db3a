//! cohort-core
//!
//! Pure domain types for the ASD cohort intake system. No I/O — this is the
//! shared vocabulary of stored case records and their inference summaries.

pub mod error;
pub mod models;
