//! Pacman-style slide progress indicator
//!
//! One point per slide along the bottom of the screen; a pacman glyph
//! sits at the current slide and the points behind it are eaten.
//! Colors come from the theme's `progress` section.

use deck_core::theme::ProgressStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const PACMAN: &str = "ᗧ";
const POINT: &str = "•";
const EATEN: &str = " ";

/// Widget displaying deck progress as a pacman trail
pub struct PacmanProgress<'a> {
    progress: &'a ProgressStyles,
    current: usize,
    total: usize,
}

impl<'a> PacmanProgress<'a> {
    pub fn new(progress: &'a ProgressStyles, current: usize, total: usize) -> Self {
        Self {
            progress,
            current,
            total,
        }
    }

    fn pacman_color(&self) -> Color {
        crate::style::rule_color(&self.progress.pacman_top, "background")
            .or_else(|| crate::style::rule_color(&self.progress.pacman_bottom, "background"))
            .unwrap_or(Color::Reset)
    }

    fn point_color(&self) -> Color {
        crate::style::rule_color(&self.progress.point, "borderColor").unwrap_or(Color::Reset)
    }
}

impl Widget for PacmanProgress<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.total == 0 || area.height == 0 {
            return;
        }

        let pacman_style = Style::default().fg(self.pacman_color());
        let point_style = Style::default().fg(self.point_color());

        let mut spans = Vec::with_capacity(self.total * 2);
        for i in 0..self.total {
            let span = match i.cmp(&self.current) {
                std::cmp::Ordering::Less => Span::raw(EATEN),
                std::cmp::Ordering::Equal => Span::styled(PACMAN, pacman_style),
                std::cmp::Ordering::Greater => Span::styled(POINT, point_style),
            };
            spans.push(span);
            if i + 1 < self.total {
                spans.push(Span::raw(" "));
            }
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
