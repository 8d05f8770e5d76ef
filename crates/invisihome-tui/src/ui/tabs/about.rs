use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::styles;

const KEY_TARGETS: [&str; 4] = [
    "Ensure access to adequate housing",
    "Provide sustainable transport systems",
    "Enhance inclusive urbanization",
    "Protect cultural and natural heritage",
];

const GLOBAL_IMPACT: [&str; 4] = [
    "1 billion people live in slums",
    "3 billion need improved housing",
    "Cities consume 78% of energy",
    "Urban areas produce 70% of CO2",
];

const CAPABILITIES: [(&str, &str); 3] = [
    ("Data Analysis", "Advanced analytics to process urban data and identify patterns"),
    ("Community Mapping", "Identify underserved areas and vulnerable populations"),
    ("Predictive Insights", "Forecast future urban challenges and opportunities"),
];

const APPROACH: [(&str, &str); 3] = [
    (
        "Data Collection",
        "Gather comprehensive urban data including demographics, infrastructure, services, and economic indicators from reliable sources.",
    ),
    (
        "AI Model Training",
        "Develop and train machine learning models to identify patterns and predict underserved areas with high accuracy.",
    ),
    (
        "Visualization & Action",
        "Create interactive dashboards and actionable insights for policymakers and urban planners to drive inclusive development.",
    ),
];

const PRIMARY_DATASETS: [&str; 4] = [
    "Census Bureau demographic data",
    "World Bank urban development indicators",
    "UN-Habitat slum mapping data",
    "OpenStreetMap infrastructure data",
];

const SUPPORTING_DATASETS: [&str; 4] = [
    "Municipal service accessibility maps",
    "Economic survey data",
    "Healthcare facility locations",
    "Educational institution mapping",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_overview(frame, columns[0]);
    render_approach(frame, columns[1]);
}

fn bullets<'a>(items: &'a [&'a str]) -> impl Iterator<Item = Line<'a>> {
    items.iter().map(|item| {
        Line::from(vec![
            Span::styled("  • ", styles::muted_style()),
            Span::raw(*item),
        ])
    })
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false))
}

fn render_overview(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Sustainable Cities and Communities", styles::highlight_style())),
        Line::from(""),
        Line::from(
            "Sustainable Development Goal 11 aims to \"Make cities and human settlements inclusive, \
             safe, resilient and sustainable.\" By 2050, it's projected that 68% of the world's \
             population will live in cities, making urban planning and sustainable development \
             more critical than ever.",
        ),
        Line::from(""),
        Line::from(Span::styled("Key Targets", styles::title_style())),
    ];
    lines.extend(bullets(&KEY_TARGETS));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Global Impact", styles::success_style())));
    lines.extend(bullets(&GLOBAL_IMPACT));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("AI for Urban Inclusion", styles::title_style())));
    lines.push(Line::from(
        "Artificial Intelligence and Machine Learning technologies are revolutionizing how we \
         understand and address urban inequality. By analyzing vast datasets, we can identify \
         underserved communities and predict areas that need immediate attention.",
    ));
    for (name, desc) in CAPABILITIES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", name), styles::highlight_style()),
            Span::styled(desc, styles::muted_style()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(section_block(" About SDG 11 "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_approach(frame: &mut Frame, area: Rect) {
    let mut lines = vec![];
    for (i, (step, desc)) in APPROACH.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), styles::selected_style()),
            Span::styled(format!(" {}", step), styles::title_style()),
        ]));
        lines.push(Line::from(Span::styled(format!("    {}", desc), styles::muted_style())));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Real Datasets Used", styles::title_style())));
    lines.push(Line::from(Span::styled("Primary Data Sources", styles::highlight_style())));
    lines.extend(bullets(&PRIMARY_DATASETS));
    lines.push(Line::from(Span::styled("Supporting Datasets", styles::highlight_style())));
    lines.extend(bullets(&SUPPORTING_DATASETS));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Note: ", styles::warning_style()),
        Span::styled(
            "All datasets are processed in compliance with privacy regulations and used solely \
             for research and development purposes to advance urban inclusion goals.",
            styles::muted_style(),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(section_block(" Our Approach "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
