//! Theme composition for deck rendering
//!
//! A [`Theme`] is composed once at startup from three inputs — a
//! [`Palette`], a [`Typography`] selection, and [`StyleOverrides`] —
//! deep-merged over the built-in structural defaults. The result is
//! immutable and shared by reference with every rendering component.

mod compose;
mod defaults;
mod loader;
mod palette;
mod style;
mod typography;

pub use compose::Theme;
pub use defaults::built_in as built_in_styles;
pub use loader::{load_theme, ThemeFile};
pub use palette::Palette;
pub use style::{ComponentStyles, HeadingStyles, ProgressStyles, StyleOverrides, StyleRules};
pub use typography::Typography;
