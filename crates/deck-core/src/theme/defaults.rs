//! Built-in structural style defaults
//!
//! Every structural location the renderer looks up by fixed path is
//! populated here, so a theme composed from empty inputs is still
//! total: `components.heading.h1..h6`, `components.p`,
//! `components.codePane`, and the three `progress` areas.

use super::style::StyleOverrides;

/// Default background/border color for the progress indicator
const PROGRESS_COLOR: &str = "#CECECE";

impl StyleOverrides {
    /// The built-in default rule set layered underneath caller overrides
    pub fn built_in() -> Self {
        let mut defaults = StyleOverrides::default();

        let heading = &mut defaults.components.heading;
        for (rules, font_size) in [
            (&mut heading.h1, "4rem"),
            (&mut heading.h2, "3.5rem"),
            (&mut heading.h3, "3rem"),
            (&mut heading.h4, "2.5rem"),
            (&mut heading.h5, "2rem"),
            (&mut heading.h6, "1.5rem"),
        ] {
            rules.insert("fontSize", font_size);
            rules.insert("textTransform", "uppercase");
            rules.insert("marginBottom", "0.5em");
        }

        defaults.components.p.insert("marginBottom", "0.5em");
        defaults.components.code_pane.insert("fontSize", "1.6rem");

        defaults
            .progress
            .pacman_top
            .insert("background", PROGRESS_COLOR);
        defaults
            .progress
            .pacman_bottom
            .insert("background", PROGRESS_COLOR);
        defaults
            .progress
            .point
            .insert("borderColor", PROGRESS_COLOR);

        defaults
    }
}

/// The built-in default rule set
pub fn built_in() -> StyleOverrides {
    StyleOverrides::built_in()
}
