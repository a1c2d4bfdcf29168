//! Registration form state machine.
//!
//! # Responsibility
//! - Own the in-progress draft and its current validation errors.
//! - Gate record creation behind a full validation pass.
//!
//! # Invariants
//! - A record leaves the form only when validation reports no errors.
//! - A rejected submit keeps the draft unchanged for in-place correction.
//! - A successful submit resets the draft and clears all errors.

use crate::model::student::{Field, Student, StudentDraft};
use crate::validate::rules::{validate, ValidationErrors};

/// Draft-owning form; yields a record on successful submit.
///
/// The form knows nothing about the roster: the accepted record is
/// returned to the caller, which decides where it goes.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: StudentDraft,
    errors: ValidationErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft values.
    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    /// Errors from the most recent rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Overwrites one draft field; validation is deferred to submit.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validates the draft and promotes it on success.
    ///
    /// # Contract
    /// - Success: returns the accepted record; the draft resets to
    ///   all-empty fields and errors are cleared.
    /// - Failure: returns `None`; the new mapping replaces any previous
    ///   errors and the draft is retained unchanged.
    pub fn submit(&mut self) -> Option<Student> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        let student = Student::from_draft(&self.draft);
        self.draft = StudentDraft::default();
        self.errors = ValidationErrors::default();
        Some(student)
    }
}
