//! Core domain logic for Rollcall.
//! This crate is the single source of truth for registration invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Field, Gender, Student, StudentDraft};
pub use registry::roster::Roster;
pub use service::registration::RegistrationForm;
pub use service::session::{Session, ViewMode};
pub use validate::rules::{validate, ValidationErrors};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
