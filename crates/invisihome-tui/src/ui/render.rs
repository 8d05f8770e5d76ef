use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, View};

use super::landing;
use super::styles;
use super::tabs::{about, dashboard};

const LOGO: [&str; 3] = [
    "  ╦╔╗╔╦  ╦╦╔═╗╦╦ ╦╔═╗╔╦╗╔═╗",
    "  ║║║║╚╗╔╝║╚═╗║╠═╣║ ║║║║║╣ ",
    "  ╩╝╚╝ ╚╝ ╩╚═╝╩╩ ╩╚═╝╩ ╩╚═╝",
];

pub fn render(frame: &mut Frame, app: &App) {
    if app.view() == View::Landing {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Landing page
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        landing::render(frame, app, chunks[0]);
        render_status_bar(frame, app, chunks[1]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Length(2), // Tabs
                Constraint::Min(10),   // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        render_title_bar(frame, app, chunks[0]);
        render_tabs(frame, app, chunks[1]);
        render_main_content(frame, app, chunks[2]);
        render_status_bar(frame, app, chunks[3]);
    }

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

/// Lines of the ASCII logo, each in the title style
pub fn logo_lines() -> Vec<Line<'static>> {
    LOGO.iter()
        .map(|l| Line::from(Span::styled(*l, styles::title_style())))
        .collect()
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Invisihome";
    let user = app
        .session
        .current()
        .map(|s| format!("{} <{}>  ", s.name, s.email))
        .unwrap_or_default();
    let help_hint = "[?] Help";

    let right_len = user.chars().count() + help_hint.len();
    let padding = (area.width as usize).saturating_sub(title.len() + right_len + 2);

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(user, styles::list_item_style()),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.view();
    let tabs = [("[1] ", View::Dashboard), ("[2] ", View::About)];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, view)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("{}{}", key, view.title());
        if *view == current {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.view() {
        View::Dashboard => dashboard::render(frame, app, area),
        View::About => about::render(frame, area),
        View::Landing => landing::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.view() {
        View::Landing => "[Tab] next field | [Esc] quit",
        _ => "[o] sign out | [q]uit",
    };

    let left_text = match app.status_message {
        Some(ref msg) => format!(" {} ", msg),
        None => String::new(),
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame, _app: &App) {
    let area = centered_rect_fixed(52, 26, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let mut help_text = logo_lines();
    help_text.push(Line::from(Span::styled(
        format!("              version {}", version),
        styles::muted_style(),
    )));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(" Navigation", styles::highlight_style())));
    help_text.push(help_line("1 / 2", "Dashboard / About"));
    help_text.push(help_line("Tab", "Next page"));
    help_text.push(help_line("o", "Sign out"));
    help_text.push(help_line("q", "Quit"));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(" Dashboard", styles::highlight_style())));
    help_text.push(help_line("←/→", "Previous/next ward"));
    help_text.push(help_line("u", "Choose a data file (CSV, JSON, Excel)"));
    help_text.push(help_line("p", "Process file with the model"));
    help_text.push(help_line("e", "Export results as CSV"));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(" Sign in", styles::highlight_style())));
    help_text.push(help_line("Tab/↑/↓", "Move between fields"));
    help_text.push(help_line("Enter", "Next field / submit / toggle"));
    help_text.push(help_line("Esc", "Quit"));
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("       Press ", styles::muted_style()),
        Span::styled("?", styles::help_key_style()),
        Span::styled(" or ", styles::muted_style()),
        Span::styled("Esc", styles::help_key_style()),
        Span::styled(" to close", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let mut lines = logo_lines();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "   Are you sure you want to quit?",
        styles::highlight_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   Press ", styles::muted_style()),
        Span::styled("[Y]", styles::help_key_style()),
        Span::styled(" to quit, ", styles::muted_style()),
        Span::styled("[N]", styles::help_key_style()),
        Span::styled(" to cancel", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let outer = Rect::new(0, 0, 100, 50);
        let rect = centered_rect_fixed(40, 10, outer);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamped_to_area() {
        let outer = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(40, 10, outer);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
