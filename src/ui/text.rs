//! Plain-text rendering of the visual tree, used by headless mode.

use crate::ui::view::{Dashboard, View};
use std::fmt::Write;

pub fn render_text(view: &View) -> String {
    match view {
        View::Loading { caption } => format!("[loading] {}\n", caption),
        View::Error { title, message } => format!("[error] {}\n{}\n", title, message),
        View::Ready(dashboard) => render_dashboard_text(dashboard),
    }
}

fn render_dashboard_text(dashboard: &Dashboard) -> String {
    // Writing into a String cannot fail
    let mut out = String::new();
    let header = &dashboard.header;
    let _ = writeln!(out, "{} [{}]", header.title, header.badge);
    let _ = writeln!(out, "{}", header.subtitle);
    out.push('\n');

    for card in &dashboard.cards {
        let _ = writeln!(out, "{}: {}", card.label, card.value);
    }
    out.push('\n');

    let chart = &dashboard.chart;
    let _ = writeln!(
        out,
        "{} - {} (legend: {})",
        dashboard.chart_title, chart.options.title, chart.options.legend_position
    );
    for series in &chart.datasets {
        let points: Vec<String> = chart
            .labels
            .iter()
            .zip(&series.data)
            .map(|(label, value)| format!("{}={}", label, value))
            .collect();
        let _ = writeln!(out, "  {}: {}", series.label, points.join(", "));
    }
    out.push('\n');

    let _ = writeln!(out, "{}", dashboard.features_title);
    for (i, feature) in dashboard.features.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, feature);
    }
    out.push('\n');

    let demo = &dashboard.demo;
    let _ = writeln!(out, "{}", demo.title);
    let _ = writeln!(out, "  {}", demo.description);
    let buttons: Vec<String> = demo.buttons.iter().map(|b| format!("[{}]", b)).collect();
    let _ = writeln!(out, "  {}", buttons.join(" "));
    out.push('\n');

    let _ = writeln!(out, "{}", dashboard.footer);
    out
}
