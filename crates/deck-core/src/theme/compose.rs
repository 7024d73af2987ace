//! Theme composition
//!
//! [`Theme::compose`] is the single meaningful API of the theme layer:
//! it combines a palette, a typography selection, and style overrides
//! into one immutable theme value, layering the built-in structural
//! defaults underneath the caller's overrides.

use serde::{Deserialize, Serialize};

use super::palette::Palette;
use super::style::{ComponentStyles, ProgressStyles, StyleOverrides};
use super::typography::Typography;

/// The composed theme consumed read-only by rendering.
///
/// Palette and typography pass through composition unchanged; the
/// `progress` and `components` sections are the deep merge of the
/// built-in defaults with the caller's overrides, caller values
/// winning at the leaf-property level. Construct once at startup and
/// share by reference; nothing mutates a theme after composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub progress: ProgressStyles,
    pub components: ComponentStyles,
}

impl Theme {
    /// Compose a theme from a palette, a typography selection, and
    /// style overrides.
    ///
    /// Pure and total: empty inputs are fine, every structural
    /// location known to the defaults is present in the result, and
    /// override-only locations pass through verbatim. Identical inputs
    /// always produce identical themes.
    pub fn compose(palette: Palette, typography: Typography, overrides: StyleOverrides) -> Self {
        let mut styles = StyleOverrides::built_in();
        styles.merge_from(&overrides);

        Self {
            palette,
            typography,
            progress: styles.progress,
            components: styles.components,
        }
    }

    /// Compose with no overrides: the built-in defaults as-is
    pub fn compose_default(palette: Palette, typography: Typography) -> Self {
        Self::compose(palette, typography, StyleOverrides::default())
    }
}
