//! Accepted-records list view.
//!
//! # Responsibility
//! - Render the roster as a read-only table, one row per record.
//! - Derive row cells (salutation included) from the record model.

use crate::app::App;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;
use rollcall_core::Student;

/// Table cells for one record, in column order.
pub fn record_cells(student: &Student) -> [String; 4] {
    [
        student.gender.salutation().to_string(),
        student.full_name(),
        student.date_of_birth.clone(),
        student.email.clone(),
    ]
}

pub fn draw(frame: &mut Frame, app: &App) {
    let rows_layout = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    frame.render_widget(
        Paragraph::new("Students").style(Style::new().add_modifier(Modifier::BOLD)),
        rows_layout[0],
    );

    let header = Row::new(["Salutation", "Name", "DOB", "Email"])
        .style(Style::new().add_modifier(Modifier::BOLD));
    let rows = app
        .session()
        .roster()
        .students()
        .iter()
        .map(|student| Row::new(record_cells(student).to_vec()));
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Percentage(40),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, rows_layout[1]);

    frame.render_widget(
        Paragraph::new("b Back to Form · q quit").style(Style::new().fg(Color::DarkGray)),
        rows_layout[2],
    );
}
