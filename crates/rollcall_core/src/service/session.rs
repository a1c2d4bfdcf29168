//! Root interaction session.
//!
//! # Responsibility
//! - Own the roster, the active view and the registration form.
//! - Apply the submit and back view transitions.
//!
//! # Invariants
//! - The roster only grows through successful form submits.
//! - `back` never clears the roster; the form draft is already blank
//!   because the submit that left the form view reset it.
//! - Log events carry counts only, never field values.

use crate::model::student::Field;
use crate::registry::roster::Roster;
use crate::service::registration::RegistrationForm;
use log::{debug, info};

/// Which of the two views is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Registration form with inline errors.
    #[default]
    Form,
    /// Read-only table of accepted records.
    List,
}

/// Single source of truth for records and view state.
///
/// All mutation arrives through the three operations below, each of
/// which runs to completion before the next event is handled.
#[derive(Debug, Default)]
pub struct Session {
    form: RegistrationForm,
    roster: Roster,
    view: ViewMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Routes one field edit to the form.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.edit_field(field, value);
    }

    /// Submits the form; an accepted record is prepended to the roster
    /// and the list view is shown.
    ///
    /// Returns whether the submit was accepted.
    pub fn submit(&mut self) -> bool {
        match self.form.submit() {
            Some(student) => {
                self.roster.add(student);
                self.view = ViewMode::List;
                info!(
                    "event=student_registered module=core status=ok roster_len={}",
                    self.roster.len()
                );
                true
            }
            None => {
                debug!(
                    "event=submit_rejected module=core status=invalid error_count={}",
                    self.form.errors().len()
                );
                false
            }
        }
    }

    /// Returns to the form view; roster and draft are untouched.
    pub fn back(&mut self) {
        debug!("event=view_back module=core status=ok");
        self.view = ViewMode::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, ViewMode};
    use crate::model::student::Field;

    #[test]
    fn session_starts_on_empty_form_view() {
        let session = Session::new();
        assert_eq!(session.view(), ViewMode::Form);
        assert!(session.roster().is_empty());
        assert!(session.form().draft().is_blank());
    }

    #[test]
    fn back_keeps_roster_intact() {
        let mut session = Session::new();
        session.edit_field(Field::FirstName, "Ann");
        session.edit_field(Field::LastName, "Lee");
        session.edit_field(Field::Gender, "female");
        session.edit_field(Field::DateOfBirth, "1990-01-01");
        session.edit_field(Field::Email, "ann@x.com");
        assert!(session.submit());
        assert_eq!(session.view(), ViewMode::List);

        session.back();
        assert_eq!(session.view(), ViewMode::Form);
        assert_eq!(session.roster().len(), 1);
    }
}
