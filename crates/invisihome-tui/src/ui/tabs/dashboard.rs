use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use invisihome_core::analysis::metrics::{
    CONFUSION_MATRIX, DATA_SOURCES, FEATURE_IMPORTANCE, MODEL_FEATURES, PERFORMANCE,
};
use invisihome_core::analysis::wards::{
    total_population, IMPROVEMENT_RATE_PERCENT, UNDERSERVED_PERCENT, WELL_SERVED_PERCENT,
};
use invisihome_core::analysis::{ServiceStatus, WARDS};
use invisihome_core::utils::{format_kb, format_thousands, truncate_string};

use crate::app::{App, AppState};
use crate::ui::styles;

/// Width of the horizontal bars in the charts
const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Vertical layout:
    // 1. Headline stats (4 tiles)
    // 2. Ward analysis + upload | Ward data
    // 3. Model performance charts
    // 4. Model information
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Stats tiles
            Constraint::Length(13), // Ward row
            Constraint::Min(9),     // Performance row
            Constraint::Length(7),  // Model info
        ])
        .split(area);

    render_stats(frame, main_chunks[0]);

    let ward_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_ward_analysis(frame, app, ward_chunks[0]);
    render_ward_data(frame, app, ward_chunks[1]);

    render_performance(frame, main_chunks[2]);
    render_model_info(frame, main_chunks[3]);
}

/// A text bar `filled/width` wide, e.g. "████░░░░"
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn status_color(status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::WellServed => styles::SECONDARY,
        ServiceStatus::Underserved => styles::ERROR,
    }
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let tiles = [
        ("Total Population", format_thousands(total_population().into()), styles::PRIMARY),
        ("Well-Served Areas", format!("{}%", WELL_SERVED_PERCENT), styles::SECONDARY),
        ("Underserved Areas", format!("{}%", UNDERSERVED_PERCENT), styles::ERROR),
        ("Improvement Rate", format!("+{}%", IMPROVEMENT_RATE_PERCENT), styles::PRIMARY),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), chunk) in tiles.into_iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(label, styles::muted_style())),
            Line::from(Span::styled(value, styles::value_style(color))),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false));
        frame.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

fn render_ward_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let dashboard = &app.dashboard;
    let selected = dashboard.selected_ward();
    let mut lines = vec![];

    // Ward selector
    let mut ward_spans = vec![Span::styled("Ward:  ← ", styles::muted_style())];
    for ward in WARDS.iter() {
        if ward.name == selected.name {
            ward_spans.push(Span::styled(format!("[{}]", ward.name), styles::tab_style(true)));
        } else {
            ward_spans.push(Span::styled(format!(" {} ", ward.name), styles::muted_style()));
        }
    }
    ward_spans.push(Span::styled(" →", styles::muted_style()));
    lines.push(Line::from(ward_spans));
    lines.push(Line::from(vec![
        Span::styled("Population: ", styles::muted_style()),
        Span::raw(format_thousands(selected.population.into())),
    ]));
    lines.push(Line::from(""));

    // Upload
    lines.push(Line::from(Span::styled(
        "Upload Data for AI/ML Analysis",
        styles::title_style(),
    )));

    let editing = matches!(app.state, AppState::EnteringPath);
    let width = (area.width as usize).saturating_sub(12);
    let path_style = if editing {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if editing { "▌" } else { "" };
    let path_shown = if editing || !dashboard.path_input.is_empty() {
        truncate_string(&dashboard.path_input, width)
    } else {
        "press [u] to choose a CSV, JSON or Excel file".to_string()
    };
    lines.push(Line::from(vec![
        Span::styled("File: ", styles::muted_style()),
        Span::styled(format!("{}{}", path_shown, cursor), path_style),
    ]));

    if let Some(ref file) = dashboard.uploaded_file {
        lines.push(Line::from(vec![
            Span::styled("  ▤ ", styles::title_style()),
            Span::raw(file.name.clone()),
            Span::styled(format!(" ({})", format_kb(file.size_bytes)), styles::muted_style()),
        ]));
        if dashboard.processing {
            lines.push(Line::from(Span::styled(
                "  ◌ AI/ML model is processing your data...",
                styles::warning_style(),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("  [p]", styles::help_key_style()),
                Span::styled(" Process File", styles::help_desc_style()),
            ]));
        }
    }

    if dashboard.results.is_some() {
        lines.push(Line::from(vec![
            Span::styled("  [e]", styles::help_key_style()),
            Span::styled(" Export results (CSV)", styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Ward-Level Analysis ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(editing));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_ward_data(frame: &mut Frame, app: &App, area: Rect) {
    let dashboard = &app.dashboard;

    // Model output replaces the static ward figures once available
    let (served, underserved, title) = match dashboard.results {
        Some(ref results) => (
            results.well_served_percent(),
            results.underserved_percent(),
            format!(" Model Results - {} ", results.file_name),
        ),
        None => {
            let ward = dashboard.selected_ward();
            (
                u32::from(ward.served),
                u32::from(ward.underserved),
                format!(" {} ", ward.name),
            )
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<13}", "Well-Served"), styles::muted_style()),
            Span::styled(bar(served as f64 / 100.0, BAR_WIDTH), styles::success_style()),
            Span::styled(format!(" {}%", served), styles::value_style(styles::SECONDARY)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Underserved"), styles::muted_style()),
            Span::styled(bar(underserved as f64 / 100.0, BAR_WIDTH), styles::error_style()),
            Span::styled(format!(" {}%", underserved), styles::value_style(styles::ERROR)),
        ]),
    ];

    if let Some(ref results) = dashboard.results {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Predictions", styles::highlight_style())));
        for prediction in &results.predictions {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8}", prediction.ward), styles::muted_style()),
                Span::styled(
                    format!("{:<13}", prediction.status.label()),
                    styles::value_style(status_color(prediction.status)),
                ),
                Span::raw(prediction.confidence_percent()),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "Processed {}",
                results.processed_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
            ),
            styles::muted_style(),
        )));
    }

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_performance(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" AI/ML Model Performance ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),     // Metric tiles
            Constraint::Percentage(25), // Classification split
            Constraint::Fill(1),        // Feature importance
            Constraint::Length(40),     // Confusion matrix
        ])
        .split(inner);

    let colors = [styles::PRIMARY, styles::SECONDARY, styles::ACCENT, styles::PURPLE];

    // Metric tiles
    let metric_lines: Vec<Line> = PERFORMANCE
        .iter()
        .zip(colors)
        .map(|((label, value), color)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), styles::muted_style()),
                Span::styled(format!("{:>3}%", value), styles::value_style(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(metric_lines), chunks[0]);

    // Classification split
    let split_width = (chunks[1].width as usize).saturating_sub(2).min(BAR_WIDTH);
    let served = f64::from(WELL_SERVED_PERCENT) / 100.0;
    let classification = vec![
        Line::from(Span::styled("Classification Results", styles::highlight_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled(bar(served, split_width), styles::success_style()),
        ]),
        Line::from(vec![
            Span::styled("● Well-Served ", styles::success_style()),
            Span::raw(format!("{}%", WELL_SERVED_PERCENT)),
        ]),
        Line::from(vec![
            Span::styled("● Underserved ", styles::error_style()),
            Span::raw(format!("{}%", UNDERSERVED_PERCENT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(classification), chunks[1]);

    // Feature importance
    let mut features = vec![
        Line::from(Span::styled("Feature Importance", styles::highlight_style())),
        Line::from(""),
    ];
    for ((label, weight), color) in FEATURE_IMPORTANCE.iter().zip(colors) {
        features.push(Line::from(vec![
            Span::styled(format!("{:<23}", label), styles::muted_style()),
            Span::styled(bar(*weight, BAR_WIDTH / 2), styles::value_style(color)),
            Span::raw(format!(" {:.2}", weight)),
        ]));
    }
    frame.render_widget(Paragraph::new(features), chunks[2]);

    render_confusion_matrix(frame, chunks[3]);
}

fn render_confusion_matrix(frame: &mut Frame, area: Rect) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Pred. Well"),
        Cell::from("Pred. Under"),
    ])
    .style(styles::muted_style());

    let labels = ["Actual Well", "Actual Under"];
    let rows: Vec<Row> = CONFUSION_MATRIX
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (counts, label))| {
            let cells = counts.iter().enumerate().map(|(j, count)| {
                // Diagonal is correct classification
                let style = if i == j {
                    styles::value_style(styles::SECONDARY)
                } else {
                    styles::value_style(styles::ERROR)
                };
                Cell::from(count.to_string()).style(style)
            });
            Row::new(std::iter::once(Cell::from(label)).chain(cells))
        })
        .collect();

    let widths = [
        Constraint::Length(13),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title("Confusion Matrix")
            .title_style(styles::highlight_style()),
    );
    frame.render_widget(table, area);
}

fn render_model_info(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Model Information ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let accuracy: Vec<String> = PERFORMANCE
        .iter()
        .map(|(label, value)| format!("{}: {}%", label, value))
        .collect();

    let columns: [(&str, Vec<String>); 3] = [
        ("Data Sources", DATA_SOURCES.iter().map(|s| s.to_string()).collect()),
        ("Model Features", MODEL_FEATURES.iter().map(|s| s.to_string()).collect()),
        ("Accuracy Metrics", accuracy),
    ];

    for ((heading, items), chunk) in columns.into_iter().zip(chunks.iter()) {
        let mut lines = vec![Line::from(Span::styled(heading, styles::highlight_style()))];
        lines.extend(
            items
                .into_iter()
                .map(|item| Line::from(Span::styled(format!("• {}", item), styles::muted_style()))),
        );
        frame.render_widget(Paragraph::new(lines), *chunk);
    }
}
