//! Student registration domain model.
//!
//! # Responsibility
//! - Define the canonical registration record and its draft form.
//! - Own gender conversion and the salutation rule used by display.
//!
//! # Invariants
//! - A `Student` is only built from a draft that passed validation.
//! - Accepted records are never mutated afterwards.
//! - `Gender::from_input` and `Gender::salutation` agree on the
//!   non-"male" fallback.

use serde::{Deserialize, Serialize};

/// Gender choice for a registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Converts raw draft input into a gender.
    ///
    /// # Contract
    /// - `"male"` maps to `Male`.
    /// - Every other value maps to `Female`. The input widget restricts
    ///   choices to `male`/`female` and validation rejects emptiness, so
    ///   the fallback only matters for programmatic input.
    pub fn from_input(value: &str) -> Self {
        if value == "male" {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Returns the salutation shown in the list view.
    pub fn salutation(self) -> &'static str {
        match self {
            Self::Male => "Mr",
            Self::Female => "Mrs",
        }
    }
}

/// Names one editable field of a registration draft.
///
/// Variant order is the form display order; it also drives the ordering
/// of validation error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    Email,
}

impl Field {
    /// All fields in form display order.
    pub fn all() -> &'static [Field] {
        &[
            Field::FirstName,
            Field::LastName,
            Field::Gender,
            Field::DateOfBirth,
            Field::Email,
        ]
    }

    /// Stable snake_case name used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::DateOfBirth => "date_of_birth",
            Self::Email => "email",
        }
    }

    /// Human-facing label used by the form view.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of Birth",
            Self::Email => "Email",
        }
    }

    /// Next field in display order, wrapping at the end.
    pub fn next(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|field| *field == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Previous field in display order, wrapping at the start.
    pub fn prev(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|field| *field == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated registration record accepted into the roster.
///
/// Records carry no identifier; duplicates are permitted by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// `YYYY-MM-DD` shaped text; calendar validity is not checked.
    pub date_of_birth: String,
    pub email: String,
}

impl Student {
    /// Builds a record from a validated draft.
    ///
    /// # Invariants
    /// - Callers must validate the draft first; the conversion itself
    ///   applies the gender fallback and never fails.
    pub fn from_draft(draft: &StudentDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            gender: Gender::from_input(&draft.gender),
            date_of_birth: draft.date_of_birth.clone(),
            email: draft.email.clone(),
        }
    }

    /// Full display name, first and last joined by one space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// In-progress, not-yet-validated registration input.
///
/// All fields start empty; the gender field holds the raw selector value
/// (empty, `male`, or `female` when driven through the UI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
}

impl StudentDraft {
    /// Overwrites one field, leaving the others unchanged.
    ///
    /// No validation happens here; validation is deferred to submit.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Gender => self.gender = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Email => self.email = value,
        }
    }

    /// Returns the current raw value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
        }
    }

    /// Returns whether every field is still empty.
    pub fn is_blank(&self) -> bool {
        Field::all().iter().all(|field| self.get(*field).is_empty())
    }
}
