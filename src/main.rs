//! termdeck - A themed slide-deck presenter for the terminal
//!
//! This is the binary entry point. All logic lives in the library
//! crates: deck-core composes the theme and parses the deck, deck-tui
//! renders it.

use std::path::{Path, PathBuf};

use clap::Parser;
use deck_core::{load_deck, load_theme, Deck};

const DECK_FILENAME: &str = "deck.toml";
const THEME_FILENAME: &str = "theme.toml";

/// termdeck - A themed slide-deck presenter for the terminal
#[derive(Parser, Debug)]
#[command(name = "termdeck")]
#[command(about = "A themed slide-deck presenter for the terminal", long_about = None)]
struct Args {
    /// Path to a deck.toml file or a directory containing one
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Path to a theme.toml file (defaults to theme.toml next to the deck)
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,
}

/// Resolve a user-supplied path to the deck file it points at
fn resolve_deck_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DECK_FILENAME)
    } else {
        path.to_path_buf()
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    deck_core::logging::init()?;

    // Theme and deck are loaded once; composition happens before any
    // rendering so a malformed theme aborts here rather than
    // corrupting slides mid-presentation.
    let (deck, deck_dir) = match &args.path {
        Some(path) => {
            let deck_path = resolve_deck_path(path);
            let deck = load_deck(&deck_path)?;
            let dir = deck_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            (deck, dir)
        }
        None => {
            let local = PathBuf::from(DECK_FILENAME);
            if local.exists() {
                (load_deck(&local)?, PathBuf::from("."))
            } else {
                eprintln!("No {} found, presenting the demo deck.", DECK_FILENAME);
                eprintln!("Hint: termdeck /path/to/deck.toml");
                (Deck::sample(), PathBuf::from("."))
            }
        }
    };

    let theme_path = args
        .theme
        .unwrap_or_else(|| deck_dir.join(THEME_FILENAME));
    let theme = load_theme(&theme_path)?;

    tracing::info!(
        "Loaded deck '{}' ({} slides), theme from {}",
        deck.title,
        deck.len(),
        theme_path.display()
    );

    deck_tui::run(deck, theme)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_deck_path_passes_files_through() {
        let path = PathBuf::from("/talk/slides.toml");
        assert_eq!(resolve_deck_path(&path), path);
    }

    #[test]
    fn test_resolve_deck_path_appends_filename_for_dirs() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_deck_path(dir.path()),
            dir.path().join("deck.toml")
        );
    }
}
