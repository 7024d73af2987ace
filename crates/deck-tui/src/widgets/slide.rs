//! Slide content widget
//!
//! Renders one slide from a borrowed theme. All styling comes from
//! fixed structural lookups (`components.heading.hN`, `components.p`,
//! `components.codePane`); the widget itself holds no visual policy.

use deck_core::{Slide, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::style;

/// Widget displaying a single slide's content
pub struct SlideView<'a> {
    theme: &'a Theme,
    slide: &'a Slide,
}

impl<'a> SlideView<'a> {
    pub fn new(theme: &'a Theme, slide: &'a Slide) -> Self {
        Self { theme, slide }
    }

    fn text_style(&self) -> Style {
        Style::default().fg(style::role_color(&self.theme.palette, "secondary"))
    }

    fn render_heading(&self, text: &str, area: Rect, buf: &mut Buffer) -> u16 {
        let rules = self
            .theme
            .components
            .heading
            .level(self.slide.heading_level);
        let shown = style::apply_text_transform(rules, text);

        Paragraph::new(shown)
            .alignment(Alignment::Center)
            .style(style::heading_style(&self.theme.palette, rules))
            .render(row(area, 0, 1), buf);

        1 + style::margin_rows(rules)
    }

    fn render_paragraph(&self, text: &str, offset: u16, area: Rect, buf: &mut Buffer) -> u16 {
        Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(self.text_style())
            .render(row(area, offset, 1), buf);

        1 + style::margin_rows(&self.theme.components.p)
    }

    fn render_code(
        &self,
        code: &deck_core::CodePane,
        offset: u16,
        area: Rect,
        buf: &mut Buffer,
    ) -> u16 {
        let source_lines: Vec<&str> = code.source.lines().collect();
        let remaining = area.height.saturating_sub(offset);
        let height = (source_lines.len() as u16 + 2).min(remaining);
        if height < 3 {
            return 0;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(style::role_color(&self.theme.palette, "tertiary")));
        if let Some(language) = &code.language {
            block = block.title(Span::raw(format!(" {} ", language)));
        }

        let pane = row(area, offset, height);
        let inner = block.inner(pane);
        block.render(pane, buf);

        let lines: Vec<Line> = source_lines
            .iter()
            .map(|l| Line::styled(l.to_string(), self.text_style()))
            .collect();
        Paragraph::new(lines).render(inner, buf);

        height + style::margin_rows(&self.theme.components.code_pane)
    }

    fn render_image(
        &self,
        image: &deck_core::ImageRef,
        offset: u16,
        area: Rect,
        buf: &mut Buffer,
    ) -> u16 {
        let remaining = area.height.saturating_sub(offset);
        let height = image.max_rows.unwrap_or(remaining).min(remaining);
        if height < 3 {
            return 0;
        }

        // Terminals cannot paint the asset; frame its alt text instead
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(
                Style::default().fg(style::role_color(&self.theme.palette, "quaternary")),
            )
            .title(Span::raw(format!(" {} ", image.source)));

        let frame = row(area, offset, height);
        let inner = block.inner(frame);
        block.render(frame, buf);

        let label = Paragraph::new(image.alt.clone())
            .alignment(Alignment::Center)
            .style(self.text_style().add_modifier(Modifier::ITALIC));
        // Vertically center the alt text within the frame
        let mid = Rect {
            y: inner.y + inner.height / 2,
            height: 1.min(inner.height),
            ..inner
        };
        label.render(mid, buf);

        height
    }
}

/// A horizontal slice of `area`, `offset` rows down
fn row(area: Rect, offset: u16, height: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: height.min(area.height.saturating_sub(offset)),
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill the slide with the palette's background role
        let bg = Block::default().style(
            Style::default().bg(style::role_color(&self.theme.palette, "primary")),
        );
        bg.render(area, buf);

        // Inset content from the edges
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut offset = 0u16;

        if let Some(heading) = &self.slide.heading {
            offset += self.render_heading(heading, inner, buf);
        }

        for paragraph in &self.slide.paragraphs {
            if offset >= inner.height {
                return;
            }
            offset += self.render_paragraph(paragraph, offset, inner, buf);
        }

        if let Some(code) = &self.slide.code {
            if offset < inner.height {
                offset += self.render_code(code, offset, inner, buf);
            }
        }

        if let Some(image) = &self.slide.image {
            if offset < inner.height {
                self.render_image(image, offset, inner, buf);
            }
        }
    }
}
