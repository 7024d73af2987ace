//! Deck and slide model
//!
//! A deck is an ordered list of slides. Slides carry content only;
//! all visual decisions (colors, fonts, spacing rules) come from the
//! [`Theme`](crate::theme::Theme) at render time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Reference to an image shown on a slide.
///
/// Terminals cannot paint the image itself, so the renderer draws a
/// framed placeholder carrying the alt text, capped at `max_rows`
/// terminal rows when set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageRef {
    /// Path or URL of the asset, resolved by the host
    pub source: String,
    /// Alternative text shown inside the placeholder
    #[serde(default)]
    pub alt: String,
    /// Cap on placeholder height, in terminal rows
    #[serde(default)]
    pub max_rows: Option<u16>,
}

/// A code pane with an optional language label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodePane {
    #[serde(default)]
    pub language: Option<String>,
    pub source: String,
}

/// A single slide
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Slide {
    /// Heading text, styled from `components.heading.h{level}`
    pub heading: Option<String>,
    /// Heading level 1-6 (defaults to 1)
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
    /// Body paragraphs, styled from `components.p`
    pub paragraphs: Vec<String>,
    /// Optional code pane, styled from `components.codePane`
    pub code: Option<CodePane>,
    /// Optional image placeholder
    pub image: Option<ImageRef>,
}

fn default_heading_level() -> u8 {
    1
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            heading: None,
            heading_level: default_heading_level(),
            paragraphs: Vec::new(),
            code: None,
            image: None,
        }
    }
}

/// A full presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Built-in demo deck so the binary runs with no arguments
    pub fn sample() -> Self {
        Self {
            title: "termdeck".to_string(),
            slides: vec![
                Slide {
                    heading: Some("termdeck".to_string()),
                    heading_level: 1,
                    paragraphs: vec!["A themed slide-deck presenter for the terminal".to_string()],
                    ..Slide::default()
                },
                Slide {
                    heading: Some("Themes".to_string()),
                    heading_level: 2,
                    paragraphs: vec![
                        "One theme, composed once at startup.".to_string(),
                        "Palette and typography pass through; style overrides merge \
                         over built-in defaults, leaf-most wins."
                            .to_string(),
                    ],
                    ..Slide::default()
                },
                Slide {
                    heading: Some("theme.toml".to_string()),
                    heading_level: 3,
                    code: Some(CodePane {
                        language: Some("toml".to_string()),
                        source: "[palette]\n\
                                 primary = \"white\"\n\
                                 secondary = \"#1F2022\"\n\n\
                                 [overrides.components.heading.h1]\n\
                                 fontSize = \"5rem\"\n"
                            .to_string(),
                    }),
                    ..Slide::default()
                },
                Slide {
                    image: Some(ImageRef {
                        source: "assets/hooks-visualization.gif".to_string(),
                        alt: "Visualization of Hooks refactor".to_string(),
                        max_rows: Some(12),
                    }),
                    ..Slide::default()
                },
            ],
        }
    }
}

/// Load a deck from a TOML file.
///
/// Unlike themes there is no sensible fallback content, so a missing
/// or malformed deck file is an error.
pub fn load_deck(path: &Path) -> Result<Deck> {
    if !path.exists() {
        return Err(Error::deck_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::deck_invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    let deck: Deck = toml::from_str(&content)
        .map_err(|e| Error::deck_invalid(format!("Failed to parse {}: {}", path.display(), e)))?;

    if deck.is_empty() {
        return Err(Error::EmptyDeck);
    }

    debug!("Loaded deck '{}' with {} slides", deck.title, deck.len());
    Ok(deck)
}
