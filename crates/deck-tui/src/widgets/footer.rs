//! Footer line with deck title, font hint, and slide counter

use deck_core::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// One-row footer: `title · font-family        current/total`
pub struct Footer<'a> {
    theme: &'a Theme,
    title: &'a str,
    current: usize,
    total: usize,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme, title: &'a str, current: usize, total: usize) -> Self {
        Self {
            theme,
            title,
            current,
            total,
        }
    }

    fn left_text(&self, max_width: usize) -> String {
        // Terminals can't switch fonts, so the typography selection is
        // surfaced as a hint instead
        let text = match self.theme.typography.get("primary") {
            Some(family) => format!(" {} · {}", self.title, family),
            None => format!(" {}", self.title),
        };
        truncate_label(&text, max_width)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let counter = format!("{}/{} ", self.current + 1, self.total);
        let left = self.left_text((area.width as usize).saturating_sub(counter.width()));
        let pad = (area.width as usize)
            .saturating_sub(left.width())
            .saturating_sub(counter.width());

        let style =
            Style::default().fg(crate::style::role_color(&self.theme.palette, "quaternary"));
        let line = Line::from(vec![
            Span::styled(left, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(counter, style),
        ]);
        line.render(area, buf);
    }
}

/// Truncate a label to a display width, appending an ellipsis
fn truncate_label(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw + 1 > max_width {
            break;
        }
        out.push(c);
        width += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::theme::{Palette, StyleOverrides, Typography};

    fn test_theme() -> Theme {
        Theme::compose(
            Palette::new().with("quaternary", "#CECECE"),
            Typography::new().with("primary", "Montserrat"),
            StyleOverrides::default(),
        )
    }

    fn render(title: &str, current: usize, total: usize, width: u16) -> String {
        let theme = test_theme();
        let mut buf = Buffer::empty(Rect::new(0, 0, width, 1));
        Footer::new(&theme, title, current, total).render(buf.area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_footer_shows_title_font_and_counter() {
        let content = render("termdeck", 1, 4, 60);
        assert!(content.contains("termdeck"));
        assert!(content.contains("Montserrat"));
        assert!(content.contains("2/4"));
    }

    #[test]
    fn test_footer_without_primary_font() {
        let theme = Theme::compose(Palette::new(), Typography::new(), StyleOverrides::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        Footer::new(&theme, "talk", 0, 2).render(buf.area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("talk"));
        assert!(!content.contains("·"));
    }

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("short", 10), "short");
    }

    #[test]
    fn test_truncate_label_long() {
        let out = truncate_label("a very long presentation title", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }
}
