//! Named color roles for a presentation theme

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from semantic color-role name to a color value.
///
/// Role names are free-form: whatever the deck author defines becomes
/// available to downstream style lookups. Values are opaque strings
/// (`"#1F2022"`, `"white"`, ...) and are not validated here; the
/// renderer decides what it can display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, String>);

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for constructing palettes inline
    pub fn with(mut self, role: impl Into<String>, color: impl Into<String>) -> Self {
        self.0.insert(role.into(), color.into());
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, color: impl Into<String>) {
        self.0.insert(role.into(), color.into());
    }

    /// Look up the color value for a role
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
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
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
