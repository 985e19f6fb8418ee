//! Chart adapters
//!
//! Each adapter builds a pure view model from the store snapshots and
//! renders it with ratatui. The builders carry all the aggregation and
//! exclusion rules; the render functions are pure sinks.

pub mod budget;
pub mod category;
pub mod monthly;

use ratatui::style::Color;

use crate::models::category::NEUTRAL_GRAY;

/// Parse a "#RRGGBB" hex string into a terminal color.
///
/// Unparseable input falls back to neutral gray.
pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex)
        .or_else(|| parse_hex(NEUTRAL_GRAY))
        .unwrap_or(Color::Gray)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
