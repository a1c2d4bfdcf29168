//! Draft validation.
//!
//! # Responsibility
//! - Check registration drafts against per-field constraints.
//! - Report failures as an ordered field-to-message mapping.

pub mod rules;
