//! Dashboard performance panel
//!
//! Frames the line chart under its panel title

use crate::ui::chart::{ChartSpec, render_chart};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

pub fn render_performance_panel(f: &mut Frame, area: Rect, title: &str, chart: &ChartSpec) {
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(192, 132, 252)))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);
    render_chart(f, inner, chart);
}
