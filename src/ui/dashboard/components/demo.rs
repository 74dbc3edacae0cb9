//! Dashboard demo section

use crate::ui::view::DemoSection;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_demo(f: &mut Frame, area: Rect, demo: &DemoSection) {
    let [primary, secondary] = demo.buttons;
    let lines = vec![
        Line::from(Span::styled(
            demo.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", primary),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(124, 58, 237))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", secondary),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let block = Block::default()
        .title(demo.title)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
