//! Frontend application state and key handling.
//!
//! # Responsibility
//! - Hold the core session plus frontend-only focus state.
//! - Translate key events into session operations.
//!
//! # Invariants
//! - All record and view state lives in the core session; the frontend
//!   keeps only the focus cursor and the quit flag.
//! - Every edit routes through `Session::edit_field`.

use crossterm::event::{KeyCode, KeyEvent};
use rollcall_core::{Field, Session, ViewMode};

/// Selector choices offered by the gender input, in cycle order.
///
/// The empty choice renders as `--Select--` and fails validation, the
/// same way an untouched dropdown would.
pub const GENDER_CHOICES: [&str; 3] = ["", "male", "female"];

/// Terminal application state.
pub struct App {
    session: Session,
    focus: Field,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            focus: Field::FirstName,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Currently focused form field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one pressed key to the active view.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.session.view() {
            ViewMode::Form => self.handle_form_key(key),
            ViewMode::List => self.handle_list_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                if self.session.submit() {
                    self.focus = Field::FirstName;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == Field::Gender => self.cycle_gender(-1),
            KeyCode::Right if self.focus == Field::Gender => self.cycle_gender(1),
            KeyCode::Char(' ') if self.focus == Field::Gender => self.cycle_gender(1),
            KeyCode::Backspace => {
                if self.focus != Field::Gender {
                    let mut value = self.current_value();
                    value.pop();
                    self.session.edit_field(self.focus, value);
                }
            }
            KeyCode::Char(typed) => {
                if self.focus != Field::Gender {
                    let mut value = self.current_value();
                    value.push(typed);
                    self.session.edit_field(self.focus, value);
                }
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.session.back(),
            _ => {}
        }
    }

    fn current_value(&self) -> String {
        self.session.form().draft().get(self.focus).to_string()
    }

    fn cycle_gender(&mut self, step: isize) {
        let current = self.session.form().draft().get(Field::Gender);
        let index = GENDER_CHOICES
            .iter()
            .position(|choice| *choice == current)
            .unwrap_or(0);
        let len = GENDER_CHOICES.len() as isize;
        let next = (index as isize + step).rem_euclid(len) as usize;
        self.session.edit_field(Field::Gender, GENDER_CHOICES[next]);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
