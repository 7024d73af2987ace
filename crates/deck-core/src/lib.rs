//! # deck-core - Core Domain Types
//!
//! Foundation crate for termdeck. Provides the theme-composition
//! layer, the deck/slide model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Theme Composition (`theme`)
//! - [`Theme`] - The composed theme, built once at startup via [`Theme::compose`]
//! - [`Palette`] - Semantic color-role → color-value mapping
//! - [`Typography`] - Semantic role → font-family mapping
//! - [`StyleOverrides`] - Nested structural style rules merged over built-in defaults
//! - [`load_theme()`] - Compose a theme from a `theme.toml` file
//!
//! ### Deck Model (`deck`)
//! - [`Deck`], [`Slide`] - Presentation content
//! - [`ImageRef`], [`CodePane`] - Slide attachments
//! - [`load_deck()`] - Parse a `deck.toml` file
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use deck_core::prelude::*;
//! ```

pub mod deck;
pub mod error;
pub mod logging;
pub mod theme;

/// Prelude for common imports used throughout all termdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use deck::{load_deck, CodePane, Deck, ImageRef, Slide};
pub use error::{Error, Result, ResultExt};
pub use theme::{
    load_theme, ComponentStyles, HeadingStyles, Palette, ProgressStyles, StyleOverrides,
    StyleRules, Theme, ThemeFile, Typography,
};
