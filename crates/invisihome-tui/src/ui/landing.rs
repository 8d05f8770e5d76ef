//! Signed-out landing page: branding on the left, auth form on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use invisihome_core::auth::password::PASSWORD_HINT;

use crate::app::{App, AuthForm, AuthMode, FormFocus};

use super::render::logo_lines;
use super::styles;

/// Visible width of a text field
const FIELD_WIDTH: usize = 28;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_branding(frame, chunks[0]);
    render_form(frame, &app.form, chunks[1]);
}

fn render_branding(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    lines.extend(logo_lines());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  AI-powered platform for sustainable urban development and inclusive cities",
        styles::list_item_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  SDG 11: Sustainable Cities",
        styles::title_style(),
    )));
    lines.push(Line::from(vec![
        Span::styled("  • ", styles::success_style()),
        Span::raw("Make cities and human settlements inclusive, safe, resilient and sustainable"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  • ", styles::title_style()),
        Span::raw("Using AI/ML to identify underserved communities and promote urban inclusion"),
    ]));
    lines.push(Line::from(""));

    let features = [
        ("Data-Driven", "Real urban datasets analysis", styles::PRIMARY),
        ("AI-Powered", "Machine learning insights", styles::SECONDARY),
        ("Inclusive", "Promoting urban equity", styles::ACCENT),
    ];
    for (title, desc, color) in features {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<13}", title), styles::value_style(color)),
            Span::styled(desc, styles::muted_style()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One labelled input line, with a cursor when focused
fn field_line(label: &'static str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };

    let shown: String = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    // Keep the tail visible when the value is wider than the field
    let skip = shown.chars().count().saturating_sub(FIELD_WIDTH);
    let shown: String = shown.chars().skip(skip).collect();
    let cursor = if focused { "▌" } else { " " };

    Line::from(vec![
        Span::styled(format!("  {:<10}[", label), styles::muted_style()),
        Span::styled(format!("{:<width$}{}", shown, cursor, width = FIELD_WIDTH), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn render_form(frame: &mut Frame, form: &AuthForm, area: Rect) {
    let (heading, subheading, submit, toggle) = match form.mode {
        AuthMode::Login => (
            "Welcome Back",
            "Sign in to your account",
            "Sign In",
            "Don't have an account? Sign up",
        ),
        AuthMode::Signup => (
            "Join Us",
            "Create your account",
            "Create Account",
            "Already have an account? Sign in",
        ),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", heading), styles::title_style())),
        Line::from(Span::styled(format!("  {}", subheading), styles::muted_style())),
        Line::from(""),
    ];

    if form.mode == AuthMode::Signup {
        lines.push(field_line("Full Name", &form.name, form.focus == FormFocus::Name, false));
    }
    lines.push(field_line("Email", &form.email, form.focus == FormFocus::Email, false));
    lines.push(field_line("Password", &form.password, form.focus == FormFocus::Password, true));

    if form.mode == AuthMode::Signup {
        lines.push(Line::from(Span::styled(
            format!("  {}", PASSWORD_HINT),
            styles::muted_style(),
        )));
    }
    lines.push(Line::from(""));

    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(format!("  {}", error), styles::error_style())));
        lines.push(Line::from(""));
    }

    let button = if form.pending {
        Span::styled("  Signing in...  ", styles::warning_style())
    } else if form.focus == FormFocus::Submit {
        Span::styled(format!(" ▶ {} ◀ ", submit), styles::selected_style())
    } else {
        Span::styled(format!("   {}   ", submit), styles::list_item_style())
    };
    lines.push(Line::from(vec![Span::raw("          ["), button, Span::raw("]")]));
    lines.push(Line::from(""));

    let toggle_style = if form.focus == FormFocus::Toggle {
        styles::selected_style()
    } else {
        styles::highlight_style()
    };
    lines.push(Line::from(Span::styled(format!("  {}", toggle), toggle_style)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
