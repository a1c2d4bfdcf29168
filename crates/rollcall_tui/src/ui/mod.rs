//! View rendering for the two application screens.
//!
//! # Responsibility
//! - Dispatch drawing on the active view mode.
//! - Keep display-only derivations in pure, testable helpers.

pub mod form;
pub mod list;

use crate::app::App;
use ratatui::Frame;
use rollcall_core::ViewMode;

/// Draws the active view for the current frame.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.session().view() {
        ViewMode::Form => form::draw(frame, app),
        ViewMode::List => list::draw(frame, app),
    }
}
