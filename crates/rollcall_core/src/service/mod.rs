//! Core use-case services.
//!
//! # Responsibility
//! - Drive the form and session state machines over the leaf modules.
//! - Keep the UI layer decoupled from validation and storage details.

pub mod registration;
pub mod session;
