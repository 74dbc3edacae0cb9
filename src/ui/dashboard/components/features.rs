//! Dashboard feature list

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the static feature list, one entry per line, in the given order.
pub fn render_features(f: &mut Frame, area: Rect, title: &str, features: &[&str]) {
    let mut lines = Vec::with_capacity(features.len() * 2);
    for (i, feature) in features.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                "⚡ ",
                Style::default()
                    .fg(Color::Rgb(192, 132, 252))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*feature, Style::default().fg(Color::White)),
        ]));
    }

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
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
