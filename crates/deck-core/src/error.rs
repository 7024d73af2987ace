//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Theme Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Theme file not found: {path}")]
    ThemeNotFound { path: PathBuf },

    #[error("Invalid theme: {message}")]
    ThemeInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Deck Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Deck file not found: {path}")]
    DeckNotFound { path: PathBuf },

    #[error("Invalid deck: {message}")]
    DeckInvalid { message: String },

    #[error("Deck has no slides")]
    EmptyDeck,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn theme_invalid(message: impl Into<String>) -> Self {
        Self::ThemeInvalid {
            message: message.into(),
        }
    }

    pub fn theme_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeNotFound { path: path.into() }
    }

    pub fn deck_invalid(message: impl Into<String>) -> Self {
        Self::DeckInvalid {
            message: message.into(),
        }
    }

    pub fn deck_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DeckNotFound { path: path.into() }
    }

    /// Check if this error should trigger application exit
    ///
    /// Theme and deck problems are fatal: the theme is composed once at
    /// startup, and presenting with a partial theme would silently break
    /// every slide that follows.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ThemeInvalid { .. }
                | Error::ThemeNotFound { .. }
                | Error::DeckInvalid { .. }
                | Error::DeckNotFound { .. }
                | Error::EmptyDeck
                | Error::TerminalInit(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
