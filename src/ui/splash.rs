//! Loading screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: &str = "◌";

/// Renders a centered loading indicator above `caption`. Nothing else is drawn.
pub fn render_loading(f: &mut Frame, caption: &str) {
    let lines: Vec<Line> = vec![
        Span::styled(
            SPINNER,
            Style::default()
                .fg(Color::Rgb(192, 132, 252))
                .add_modifier(Modifier::BOLD),
        )
        .into(),
        Line::from(Span::raw(" ")),
        Span::styled(caption.to_string(), Style::default().fg(Color::Gray)).into(),
    ];

    let block_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(block_height)) / 2),
            Constraint::Length(block_height),
            Constraint::Min((f.area().height.saturating_sub(block_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let indicator = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(indicator, centered_area);
}
