//! Structural style rules and the recursive override merge
//!
//! The structure mirrors the visual areas of a deck: a `progress`
//! section for the slide-progress indicator and a `components` section
//! for slide content (headings by level, paragraphs, code panes, plus
//! any caller-defined areas). Leaves are property→value rules.
//!
//! Every type here merges the same way: `merge_from` pulls the other
//! side's values in on top, leaf-most wins, nothing is ever deleted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A leaf bag of style rules: CSS-like property name → value.
///
/// Property names (`fontSize`, `marginBottom`, `textTransform`,
/// `background`, `borderColor`, ...) and values are opaque strings;
/// the renderer interprets the ones it understands and ignores the
/// rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StyleRules(BTreeMap<String, String>);

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for constructing rule sets inline
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`, property by property.
    ///
    /// Properties present in `other` replace ours; properties only we
    /// have are kept. Keys are never removed.
    pub fn merge_from(&mut self, other: &StyleRules) {
        for (property, value) in &other.0 {
            self.0.insert(property.clone(), value.clone());
        }
    }
}

/// Heading rules keyed by level, `h1` through `h6`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadingStyles {
    pub h1: StyleRules,
    pub h2: StyleRules,
    pub h3: StyleRules,
    pub h4: StyleRules,
    pub h5: StyleRules,
    pub h6: StyleRules,
}

impl HeadingStyles {
    /// Rules for a 1-based heading level; out-of-range levels clamp to h6
    pub fn level(&self, level: u8) -> &StyleRules {
        match level {
            0 | 1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            _ => &self.h6,
        }
    }

    pub fn merge_from(&mut self, other: &HeadingStyles) {
        self.h1.merge_from(&other.h1);
        self.h2.merge_from(&other.h2);
        self.h3.merge_from(&other.h3);
        self.h4.merge_from(&other.h4);
        self.h5.merge_from(&other.h5);
        self.h6.merge_from(&other.h6);
    }
}

/// Rules for slide content components
///
/// Known areas get typed fields; anything else the deck author themes
/// (e.g. a `footer` section) lands in `extra` and passes through the
/// merge untouched by the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentStyles {
    pub heading: HeadingStyles,
    pub p: StyleRules,
    pub code_pane: StyleRules,
    #[serde(flatten)]
    pub extra: BTreeMap<String, StyleRules>,
}

impl ComponentStyles {
    /// Rules for a caller-defined component area
    pub fn area(&self, name: &str) -> Option<&StyleRules> {
        self.extra.get(name)
    }

    pub fn merge_from(&mut self, other: &ComponentStyles) {
        self.heading.merge_from(&other.heading);
        self.p.merge_from(&other.p);
        self.code_pane.merge_from(&other.code_pane);
        for (name, rules) in &other.extra {
            self.extra.entry(name.clone()).or_default().merge_from(rules);
        }
    }
}

/// Rules for the pacman-style slide-progress indicator
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressStyles {
    pub pacman_top: StyleRules,
    pub pacman_bottom: StyleRules,
    pub point: StyleRules,
}

impl ProgressStyles {
    pub fn merge_from(&mut self, other: &ProgressStyles) {
        self.pacman_top.merge_from(&other.pacman_top);
        self.pacman_bottom.merge_from(&other.pacman_bottom);
        self.point.merge_from(&other.point);
    }
}

/// The full override tree a caller may pass to theme composition.
///
/// An empty (`Default`) value means "no overrides" and composes to the
/// built-in defaults unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub progress: ProgressStyles,
    pub components: ComponentStyles,
}

impl StyleOverrides {
    pub fn merge_from(&mut self, other: &StyleOverrides) {
        self.progress.merge_from(&other.progress);
        self.components.merge_from(&other.components);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_merge_override_wins() {
        let mut base = StyleRules::new()
            .with("fontSize", "4rem")
            .with("textTransform", "uppercase");
        let over = StyleRules::new().with("fontSize", "5rem");

        base.merge_from(&over);

        assert_eq!(base.get("fontSize"), Some("5rem"));
        assert_eq!(base.get("textTransform"), Some("uppercase"));
    }

    #[test]
    fn test_rules_merge_adds_new_properties() {
        let mut base = StyleRules::new().with("fontSize", "4rem");
        let over = StyleRules::new().with("marginBottom", "0.5em");

        base.merge_from(&over);

        assert_eq!(base.len(), 2);
        assert_eq!(base.get("marginBottom"), Some("0.5em"));
    }

    #[test]
    fn test_rules_merge_empty_is_noop() {
        let mut base = StyleRules::new().with("fontSize", "4rem");
        let snapshot = base.clone();

        base.merge_from(&StyleRules::new());

        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_heading_levels_clamp() {
        let mut headings = HeadingStyles::default();
        headings.h6.insert("fontSize", "1.5rem");

        assert_eq!(headings.level(6).get("fontSize"), Some("1.5rem"));
        assert_eq!(headings.level(9).get("fontSize"), Some("1.5rem"));
        assert!(headings.level(1).is_empty());
    }

    #[test]
    fn test_heading_merge_touches_only_overridden_level() {
        let mut base = HeadingStyles::default();
        base.h1.insert("fontSize", "4rem");
        base.h2.insert("fontSize", "3.5rem");

        let mut over = HeadingStyles::default();
        over.h1.insert("fontSize", "5rem");

        base.merge_from(&over);

        assert_eq!(base.h1.get("fontSize"), Some("5rem"));
        assert_eq!(base.h2.get("fontSize"), Some("3.5rem"));
    }

    #[test]
    fn test_components_merge_recurses_into_extra() {
        let mut base = ComponentStyles::default();
        base.extra.insert(
            "footer".to_string(),
            StyleRules::new().with("fontSize", "1rem").with("color", "gray"),
        );

        let mut over = ComponentStyles::default();
        over.extra.insert(
            "footer".to_string(),
            StyleRules::new().with("fontSize", "1.2rem"),
        );

        base.merge_from(&over);

        let footer = base.area("footer").unwrap();
        assert_eq!(footer.get("fontSize"), Some("1.2rem"));
        assert_eq!(footer.get("color"), Some("gray"));
    }

    #[test]
    fn test_components_merge_keeps_unrelated_extra_areas() {
        let mut base = ComponentStyles::default();
        base.extra
            .insert("footer".to_string(), StyleRules::new().with("color", "gray"));

        let mut over = ComponentStyles::default();
        over.extra.insert(
            "blockquote".to_string(),
            StyleRules::new().with("borderColor", "#CECECE"),
        );

        base.merge_from(&over);

        assert!(base.area("footer").is_some());
        assert_eq!(
            base.area("blockquote").unwrap().get("borderColor"),
            Some("#CECECE")
        );
    }

    #[test]
    fn test_overrides_toml_camel_case_field_names() {
        let parsed: StyleOverrides = toml::from_str(
            r##"
            [progress.pacmanTop]
            background = "#CECECE"

            [components.codePane]
            fontSize = "1.6rem"

            [components.heading.h1]
            fontSize = "4rem"
            "##,
        )
        .unwrap();

        assert_eq!(
            parsed.progress.pacman_top.get("background"),
            Some("#CECECE")
        );
        assert_eq!(parsed.components.code_pane.get("fontSize"), Some("1.6rem"));
        assert_eq!(
            parsed.components.heading.h1.get("fontSize"),
            Some("4rem")
        );
    }

    #[test]
    fn test_unknown_component_areas_deserialize_into_extra() {
        let parsed: StyleOverrides = toml::from_str(
            r#"
            [components.footer]
            fontSize = "1rem"
            "#,
        )
        .unwrap();

        assert_eq!(
            parsed.components.area("footer").unwrap().get("fontSize"),
            Some("1rem")
        );
    }

    #[test]
    fn test_scalar_where_table_expected_is_rejected() {
        // Shape mismatches fail at deserialization, before composition
        let result: std::result::Result<StyleOverrides, _> = toml::from_str(
            r#"
            [components]
            p = "0.5em"
            "#,
        );
        assert!(result.is_err());
    }
}
