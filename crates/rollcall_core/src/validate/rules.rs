//! Field validation rules for registration drafts.
//!
//! # Responsibility
//! - Apply all per-field constraints to a draft in one pure pass.
//! - Produce the inline error messages shown next to each input.
//!
//! # Invariants
//! - Validation never mutates the draft and has no side effects.
//! - A field appears in the result iff it currently fails.
//! - Date-of-birth is a textual shape check only; calendar validity is
//!   not verified (`2024-13-99` passes).

use crate::model::student::{Field, StudentDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid name regex"));
static DOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid dob regex"));
// Loose shape check, not an RFC address parser: any non-whitespace run,
// `@`, non-whitespace, `.`, non-whitespace anywhere in the value.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Ordered field-to-message mapping produced by [`validate`].
///
/// An empty mapping means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Returns whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for one field, when that field currently fails.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Failing fields with their messages, in field display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.entries {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates one draft against all field rules.
///
/// # Contract
/// - Pure: the same draft always yields the same mapping.
/// - The mapping contains an entry for exactly the failing fields.
/// - Names must be non-empty and start with a letter, followed by
///   letters or spaces.
/// - Gender must be non-empty; the value domain is restricted by the
///   input widget, not here.
pub fn validate(draft: &StudentDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.first_name.is_empty() {
        errors.insert(Field::FirstName, "First name is required");
    } else if !NAME_RE.is_match(&draft.first_name) {
        errors.insert(Field::FirstName, "First name must start with a letter");
    }

    if draft.last_name.is_empty() {
        errors.insert(Field::LastName, "Last name is required");
    } else if !NAME_RE.is_match(&draft.last_name) {
        errors.insert(Field::LastName, "Last name must start with a letter");
    }

    if draft.gender.is_empty() {
        errors.insert(Field::Gender, "Gender is required");
    }

    if draft.date_of_birth.is_empty() {
        errors.insert(Field::DateOfBirth, "Date of Birth is required");
    } else if !DOB_RE.is_match(&draft.date_of_birth) {
        errors.insert(Field::DateOfBirth, "Invalid DOB format (YYYY-MM-DD)");
    }

    if draft.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email format");
    }

    errors
}
