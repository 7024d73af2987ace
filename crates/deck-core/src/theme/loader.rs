//! Theme file parser for theme.toml

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::theme::{Palette, StyleOverrides, Theme, Typography};

/// On-disk theme definition (`theme.toml`)
///
/// ```toml
/// [palette]
/// primary = "white"
/// secondary = "#1F2022"
///
/// [typography]
/// primary = "Montserrat"
///
/// [overrides.components.heading.h1]
/// fontSize = "5rem"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeFile {
    pub palette: Palette,
    pub typography: Typography,
    pub overrides: StyleOverrides,
}

impl ThemeFile {
    pub fn compose(self) -> Theme {
        Theme::compose(self.palette, self.typography, self.overrides)
    }
}

/// Load and compose a theme from a TOML file.
///
/// A missing file is not an error: the deck simply presents with the
/// built-in defaults. A present-but-malformed file aborts startup
/// instead, since a wrong-shaped theme would silently corrupt every
/// slide downstream.
pub fn load_theme(path: &Path) -> Result<Theme> {
    if !path.exists() {
        debug!("No theme file at {:?}, using defaults", path);
        return Ok(Theme::compose_default(Palette::new(), Typography::new()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::theme_invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    let file: ThemeFile = toml::from_str(&content)
        .map_err(|e| Error::theme_invalid(format!("Failed to parse {}: {}", path.display(), e)))?;

    debug!("Loaded theme from {:?}", path);
    Ok(file.compose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let theme = load_theme(&dir.path().join("theme.toml")).unwrap();

        assert!(theme.palette.is_empty());
        assert_eq!(theme.components.heading.h1.get("fontSize"), Some("4rem"));
    }

    #[test]
    fn test_full_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            r##"
            [palette]
            primary = "white"
            secondary = "#1F2022"
            quaternary = "#CECECE"

            [typography]
            primary = "Montserrat"
            secondary = "Helvetica"

            [overrides.progress.pacmanTop]
            background = "#CECECE"

            [overrides.components.heading.h1]
            fontSize = "5rem"
            "##,
        )
        .unwrap();

        let theme = load_theme(&path).unwrap();

        assert_eq!(theme.palette.get("primary"), Some("white"));
        assert_eq!(theme.typography.get("secondary"), Some("Helvetica"));
        assert_eq!(theme.progress.pacman_top.get("background"), Some("#CECECE"));
        assert_eq!(theme.components.heading.h1.get("fontSize"), Some("5rem"));
        // Default leaf preserved next to the override
        assert_eq!(
            theme.components.heading.h1.get("textTransform"),
            Some("uppercase")
        );
    }

    #[test]
    fn test_partial_file_uses_empty_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            r##"
            [palette]
            primary = "#344871"
            "##,
        )
        .unwrap();

        let theme = load_theme(&path).unwrap();

        assert_eq!(theme.palette.get("primary"), Some("#344871"));
        assert!(theme.typography.is_empty());
        assert_eq!(theme.components.p.get("marginBottom"), Some("0.5em"));
    }

    #[test]
    fn test_malformed_toml_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "[palette\nprimary = white").unwrap();

        let err = load_theme(&path).unwrap_err();
        assert!(matches!(err, Error::ThemeInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_scalar_in_table_position_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(
            &path,
            r#"
            [overrides.components]
            heading = "oops"
            "#,
        )
        .unwrap();

        let err = load_theme(&path).unwrap_err();
        assert!(matches!(err, Error::ThemeInvalid { .. }));
    }
}
