//! Dashboard main renderer

use super::components::{demo, features, footer, header, metrics, performance};
use crate::ui::view::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, dashboard: &Dashboard, with_background_color: bool) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(15, 23, 42))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], &dashboard.header);
    metrics::render_metric_cards(f, main_chunks[1], &dashboard.cards);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    performance::render_performance_panel(
        f,
        content_chunks[0],
        dashboard.chart_title,
        &dashboard.chart,
    );
    features::render_features(
        f,
        content_chunks[1],
        dashboard.features_title,
        &dashboard.features,
    );
    demo::render_demo(f, main_chunks[3], &dashboard.demo);
    footer::render_footer(f, main_chunks[4], dashboard.footer);
}
