//! Read-only bridge from theme values to ratatui styles
//!
//! Theme values are opaque strings by contract, so everything here is
//! best-effort: colors we cannot parse fall back to the terminal
//! default instead of erroring, and properties the terminal cannot
//! honor (font families, rem sizes) degrade to emphasis hints.

use deck_core::theme::{Palette, StyleRules};
use ratatui::style::{Color, Modifier, Style};

/// Parse a theme color value into a terminal color.
///
/// Understands `#RRGGBB` hex and the common named colors; anything
/// else yields `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}

/// Color for a palette role, falling back to the terminal default
pub fn role_color(palette: &Palette, role: &str) -> Color {
    palette
        .get(role)
        .and_then(parse_color)
        .unwrap_or(Color::Reset)
}

/// Color from a style-rule property (e.g. `background`, `borderColor`)
pub fn rule_color(rules: &StyleRules, property: &str) -> Option<Color> {
    rules.get(property).and_then(parse_color)
}

/// Apply a `textTransform` rule to a piece of text
pub fn apply_text_transform(rules: &StyleRules, text: &str) -> String {
    match rules.get("textTransform") {
        Some("uppercase") => text.to_uppercase(),
        Some("lowercase") => text.to_lowercase(),
        _ => text.to_string(),
    }
}

/// Map a rem-ish `fontSize` rule to terminal emphasis.
///
/// Terminals have one glyph size, so large headings become bold and
/// the largest also underlined.
pub fn emphasis_for(rules: &StyleRules) -> Modifier {
    let rem = rules
        .get("fontSize")
        .and_then(|v| v.trim_end_matches("rem").trim().parse::<f32>().ok())
        .unwrap_or(1.0);

    if rem >= 3.5 {
        Modifier::BOLD | Modifier::UNDERLINED
    } else if rem >= 2.0 {
        Modifier::BOLD
    } else {
        Modifier::empty()
    }
}

/// Blank lines to leave after a component, from its `marginBottom` rule
pub fn margin_rows(rules: &StyleRules) -> u16 {
    match rules.get("marginBottom") {
        Some(v) if !v.trim().is_empty() && v.trim() != "0" => 1,
        _ => 0,
    }
}

/// Heading style for a given level: palette text color plus emphasis
pub fn heading_style(palette: &Palette, rules: &StyleRules) -> Style {
    Style::default()
        .fg(role_color(palette, "secondary"))
        .add_modifier(emphasis_for(rules))
}
