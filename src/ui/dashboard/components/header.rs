//! Dashboard header component
//!
//! Renders the title, subtitle and live badge

use crate::ui::view::Header;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_header(f: &mut Frame, area: Rect, header: &Header) {
    let badge_text = format!(" ● {} ", header.badge);
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(badge_text.chars().count() as u16 + 2),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("✦ {}", header.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            header.subtitle,
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(title, header_chunks[0]);

    let badge = Paragraph::new(Span::styled(
        badge_text,
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(badge, header_chunks[1]);
}
