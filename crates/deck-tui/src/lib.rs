//! deck-tui - Terminal UI for termdeck
//!
//! This crate provides the ratatui-based presentation interface. It
//! takes a composed [`Theme`](deck_core::Theme) and a
//! [`Deck`](deck_core::Deck) from deck-core and adds terminal
//! rendering, event polling, and slide widgets. The theme is consumed
//! strictly read-only.

pub mod event;
pub mod presenter;
pub mod style;
pub mod terminal;
pub mod widgets;

// Re-export main entry point
pub use presenter::{run, Presenter};
