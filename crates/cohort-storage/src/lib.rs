//! cohort-storage
//!
//! Read-only access to stored case records. The live key-value store is
//! exported as a JSON snapshot; this crate loads and serves it.

pub mod cases;
pub mod error;
pub mod snapshot;
