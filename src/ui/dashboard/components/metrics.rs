//! Dashboard metric cards
//!
//! Four equal-width cards, one per headline figure

use super::super::utils::accent_color;
use crate::ui::view::MetricCard;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the row of metric cards.
pub fn render_metric_cards(f: &mut Frame, area: Rect, cards: &[MetricCard]) {
    if cards.is_empty() {
        return;
    }
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, chunk) in cards.iter().zip(card_chunks.iter()) {
        render_metric_card(f, *chunk, card);
    }
}

fn render_metric_card(f: &mut Frame, area: Rect, card: &MetricCard) {
    let accent = accent_color(card.accent);

    let lines = vec![
        Line::from(Span::styled(card.label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            card.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
