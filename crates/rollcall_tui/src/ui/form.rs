//! Registration form view.
//!
//! # Responsibility
//! - Render the five inputs with focus marker and inline errors.
//! - Mirror the selector labels of the original input widget.

use crate::app::App;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rollcall_core::{core_version, Field, RegistrationForm};

/// Maps a raw gender draft value to its selector label.
pub fn gender_label(value: &str) -> &'static str {
    match value {
        "male" => "Male",
        "female" => "Female",
        _ => "--Select--",
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(Field::all().iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(frame.area());

    frame.render_widget(
        Paragraph::new("Registration").style(Style::new().add_modifier(Modifier::BOLD)),
        rows[0],
    );

    for (index, field) in Field::all().iter().copied().enumerate() {
        draw_field(frame, rows[index + 1], app.session().form(), field, app.focus());
    }

    frame.render_widget(
        Paragraph::new(format!(
            "Tab next field · Space cycle gender · Enter register · Esc quit · v{}",
            core_version()
        ))
        .style(Style::new().fg(Color::DarkGray)),
        rows[rows.len() - 1],
    );
}

fn draw_field(frame: &mut Frame, area: Rect, form: &RegistrationForm, field: Field, focus: Field) {
    let draft = form.draft();
    let focused = field == focus;
    let marker = if focused { "> " } else { "  " };
    let value = match field {
        Field::Gender => gender_label(draft.get(field)).to_string(),
        _ => draft.get(field).to_string(),
    };
    let value_style = if focused {
        Style::new().add_modifier(Modifier::BOLD)
    } else {
        Style::new()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<15}", field.label()), Style::new().fg(Color::Cyan)),
        Span::styled(value, value_style),
    ])];
    if let Some(message) = form.errors().get(field) {
        lines.push(Line::from(Span::styled(
            format!("    {message}"),
            Style::new().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::gender_label;

    #[test]
    fn gender_labels_mirror_the_selector_options() {
        assert_eq!(gender_label(""), "--Select--");
        assert_eq!(gender_label("male"), "Male");
        assert_eq!(gender_label("female"), "Female");
        // Unknown raw values fall back to the unselected label.
        assert_eq!(gender_label("other"), "--Select--");
    }
}
