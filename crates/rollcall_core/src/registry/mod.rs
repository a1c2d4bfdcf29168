//! Accepted-record storage.
//!
//! # Responsibility
//! - Keep the authoritative ordered list of accepted records for the
//!   lifetime of the process.

pub mod roster;
