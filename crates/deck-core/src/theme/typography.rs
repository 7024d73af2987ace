//! Named font-family roles for a presentation theme

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from semantic role name to a font-family value.
///
/// Same contract as [`super::Palette`]: roles are free-form, values are
/// opaque strings passed through to the renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Typography(BTreeMap<String, String>);

impl Typography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for constructing selections inline
    pub fn with(mut self, role: impl Into<String>, family: impl Into<String>) -> Self {
        self.0.insert(role.into(), family.into());
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, family: impl Into<String>) {
        self.0.insert(role.into(), family.into());
    }

    /// Look up the font family for a role
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Typography {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
