//! Line chart rendering
//!
//! The dashboard hands a [`ChartSpec`] to [`render_chart`]; everything about
//! how the series are rasterized is left to ratatui's `Chart` widget.

use crate::models::{ChartData, Series};
use crate::ui::dashboard::utils::parse_css_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{self, Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Where the legend sits relative to the plot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl From<LegendPosition> for widgets::LegendPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::Top => widgets::LegendPosition::Top,
            LegendPosition::Bottom => widgets::LegendPosition::Bottom,
            LegendPosition::Left => widgets::LegendPosition::Left,
            LegendPosition::Right => widgets::LegendPosition::Right,
        }
    }
}

/// Static display configuration. Nothing here depends on the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub legend_position: LegendPosition,
    pub legend_color: &'static str,
    pub title: &'static str,
    pub title_color: &'static str,
    pub tick_color: &'static str,
    pub grid_color: &'static str,
}

/// Options of the "Performance Trends" chart.
pub const PERFORMANCE_CHART_OPTIONS: ChartOptions = ChartOptions {
    legend_position: LegendPosition::Top,
    legend_color: "#e2e8f0",
    title: "Monthly Performance Metrics",
    title_color: "#e2e8f0",
    tick_color: "#94a3b8",
    grid_color: "rgba(148, 163, 184, 0.1)",
};

/// Everything the chart needs: labels, series and options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(data: &ChartData, options: ChartOptions) -> Self {
        Self {
            labels: data.labels().to_vec(),
            datasets: data.datasets().to_vec(),
            options,
        }
    }

    /// `(index, value)` pairs of one series, in label order.
    pub fn points(series: &Series) -> Vec<(f64, f64)> {
        series
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }

    /// Y range covering every sample, padded when flat.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self.datasets.iter().flat_map(|s| s.data.iter().copied());
        let (min, max) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            [0.0, 1.0]
        } else if min == max {
            [min - 1.0, max + 1.0]
        } else {
            [min, max]
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.labels.len().saturating_sub(1).max(1) as f64]
    }
}

fn color_or(value: &str, fallback: Color) -> Color {
    parse_css_color(value).unwrap_or(fallback)
}

pub fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let options = &spec.options;
    let tick_style = Style::default().fg(color_or(options.tick_color, Color::Gray));
    let grid_style = Style::default().fg(color_or(options.grid_color, Color::DarkGray));

    let points: Vec<Vec<(f64, f64)>> = spec.datasets.iter().map(ChartSpec::points).collect();
    let datasets: Vec<Dataset> = spec
        .datasets
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color_or(&series.border_color, Color::Magenta)))
                .data(data)
        })
        .collect();

    let [y_min, y_max] = spec.y_bounds();
    let x_labels: Vec<Span> = spec
        .labels
        .iter()
        .map(|label| Span::styled(label.clone(), tick_style))
        .collect();
    let y_labels = vec![
        Span::styled(format!("{:.0}", y_min), tick_style),
        Span::styled(format!("{:.0}", (y_min + y_max) / 2.0), tick_style),
        Span::styled(format!("{:.0}", y_max), tick_style),
    ];

    let title = Line::from(options.title).style(
        Style::default()
            .fg(color_or(options.title_color, Color::White))
            .add_modifier(Modifier::BOLD),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title.centered())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(grid_style),
        )
        .style(Style::default().fg(color_or(options.legend_color, Color::White)))
        .legend_position(Some(options.legend_position.into()))
        .hidden_legend_constraints((Constraint::Percentage(50), Constraint::Percentage(50)))
        .x_axis(
            Axis::default()
                .style(grid_style)
                .bounds(spec.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(grid_style)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_app_data;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample_spec() -> ChartSpec {
        ChartSpec::new(&sample_app_data().chart_data, PERFORMANCE_CHART_OPTIONS)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_points_follow_label_order() {
        let spec = sample_spec();
        assert_eq!(
            ChartSpec::points(&spec.datasets[0]),
            vec![
                (0.0, 65.0),
                (1.0, 78.0),
                (2.0, 82.0),
                (3.0, 89.0),
                (4.0, 94.0),
                (5.0, 98.0)
            ]
        );
    }

    #[test]
    fn test_bounds() {
        let spec = sample_spec();
        assert_eq!(spec.y_bounds(), [65.0, 98.0]);
        assert_eq!(spec.x_bounds(), [0.0, 5.0]);
    }

    #[test]
    fn test_bounds_without_samples() {
        let empty = ChartData::new(Vec::new(), Vec::new()).unwrap();
        let spec = ChartSpec::new(&empty, PERFORMANCE_CHART_OPTIONS);
        assert_eq!(spec.y_bounds(), [0.0, 1.0]);
        assert_eq!(spec.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_flat_series_is_padded() {
        let mut spec = sample_spec();
        spec.datasets[0].data = vec![5.0; 6];
        assert_eq!(spec.y_bounds(), [4.0, 6.0]);
    }

    #[test]
    fn test_options_are_static() {
        assert_eq!(
            PERFORMANCE_CHART_OPTIONS.legend_position,
            LegendPosition::Top
        );
        assert_eq!(PERFORMANCE_CHART_OPTIONS.legend_position.to_string(), "top");
        assert_eq!(PERFORMANCE_CHART_OPTIONS.title, "Monthly Performance Metrics");
    }

    #[test]
    fn test_render_shows_title_and_legend() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let spec = sample_spec();

        terminal
            .draw(|f| {
                let area = f.area();
                render_chart(f, area, &spec);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Monthly Performance Metrics"), "{text}");
        assert!(text.contains("Performance"), "{text}");
        assert!(text.contains("Jan"), "{text}");
    }
}
