//! Presentation widgets
//!
//! All widgets borrow the composed [`Theme`](deck_core::Theme)
//! immutably and hold no visual policy of their own.

mod footer;
mod progress;
mod slide;

pub use footer::Footer;
pub use progress::PacmanProgress;
pub use slide::SlideView;
