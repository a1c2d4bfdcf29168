//! Registration domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the draft and accepted-record shapes in one place.
//!
//! # Invariants
//! - The draft is the only mutable record shape; accepted records are
//!   immutable snapshots.

pub mod student;
