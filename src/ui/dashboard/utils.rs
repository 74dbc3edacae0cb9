//! Dashboard utility functions
//!
//! Value formatting and colour mapping shared by the components

use crate::ui::view::Accent;
use ratatui::prelude::Color;

/// Formats an integer with `,` thousands separators: `1250` -> `1,250`.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    if len <= 3 {
        return s;
    }
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// The value as written, followed by `%`. No rounding is applied.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Maps a CSS colour (`rgba(...)`, `rgb(...)`, `#rrggbb` or a colour name) to
/// a terminal colour. Alpha is dropped.
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();
    let channels = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));

    match channels {
        Some(channels) => {
            let mut parts = channels.split(',').map(|c| c.trim().parse::<u8>());
            let r = parts.next()?.ok()?;
            let g = parts.next()?.ok()?;
            let b = parts.next()?.ok()?;
            Some(Color::Rgb(r, g, b))
        }
        None => value.parse::<Color>().ok(),
    }
}

/// Terminal colour for a card accent.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Purple => Color::Rgb(192, 132, 252),
        Accent::Blue => Color::Rgb(96, 165, 250),
        Accent::Yellow => Color::Rgb(250, 204, 21),
        Accent::Pink => Color::Rgb(244, 114, 182),
    }
}
