//! Presenter loop: draw the current slide, poll keys, navigate
//!
//! The theme is composed before the loop starts and only ever borrowed
//! here; rendering reads it, nothing writes it.

use deck_core::prelude::*;
use deck_core::{Deck, Theme};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::event::{self, InputKey, Message};
use crate::terminal;
use crate::widgets::{Footer, PacmanProgress, SlideView};

/// Presentation state: the deck, the theme, and the slide cursor
#[derive(Debug)]
pub struct Presenter {
    deck: Deck,
    theme: Theme,
    current: usize,
    should_quit: bool,
}

impl Presenter {
    pub fn new(deck: Deck, theme: Theme) -> Result<Self> {
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(Self {
            deck,
            theme,
            current: 0,
            should_quit: false,
        })
    }

    pub fn current_slide(&self) -> usize {
        self.current
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn next(&mut self) {
        if self.current + 1 < self.deck.len() {
            self.current += 1;
        }
    }

    fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn first(&mut self) {
        self.current = 0;
    }

    fn last(&mut self) {
        self.current = self.deck.len() - 1;
    }

    /// Apply one key press to the presentation state
    pub fn handle_key(&mut self, key: InputKey) {
        match key {
            InputKey::Right
            | InputKey::Down
            | InputKey::Enter
            | InputKey::PageDown
            | InputKey::Char(' ')
            | InputKey::Char('l')
            | InputKey::Char('n') => self.next(),
            InputKey::Left
            | InputKey::Up
            | InputKey::Backspace
            | InputKey::PageUp
            | InputKey::Char('h')
            | InputKey::Char('p') => self.previous(),
            InputKey::Home => self.first(),
            InputKey::End => self.last(),
            InputKey::Esc | InputKey::Char('q') | InputKey::CharCtrl('c') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Render the complete UI for the current slide
    ///
    /// Pure view function: reads presenter state and theme, mutates
    /// nothing.
    pub fn view(&self, frame: &mut Frame) {
        let [content, progress, footer] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        if let Some(slide) = self.deck.slide(self.current) {
            frame.render_widget(SlideView::new(&self.theme, slide), content);
        }

        frame.render_widget(
            PacmanProgress::new(&self.theme.progress, self.current, self.deck.len()),
            progress,
        );

        frame.render_widget(
            Footer::new(&self.theme, &self.deck.title, self.current, self.deck.len()),
            footer,
        );
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(Message::Key(key)) = event::poll()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }
}

/// Present a deck: terminal init, event loop, terminal restore
pub fn run(deck: Deck, theme: Theme) -> Result<()> {
    let mut presenter = Presenter::new(deck, theme)?;

    terminal::install_panic_hook();
    let mut terminal = ratatui::init();

    info!("Presenting '{}'", presenter.deck.title);
    let result = presenter.event_loop(&mut terminal);

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::theme::{Palette, StyleOverrides, Typography};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn presenter() -> Presenter {
        let theme = Theme::compose(
            Palette::new().with("secondary", "white"),
            Typography::new().with("primary", "Montserrat"),
            StyleOverrides::default(),
        );
        Presenter::new(Deck::sample(), theme).unwrap()
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let theme = Theme::compose_default(Palette::new(), Typography::new());
        let err = Presenter::new(Deck::default(), theme).unwrap_err();
        assert!(matches!(err, Error::EmptyDeck));
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut p = presenter();
        let len = Deck::sample().len();

        p.handle_key(InputKey::Left);
        assert_eq!(p.current_slide(), 0);

        for _ in 0..len + 3 {
            p.handle_key(InputKey::Right);
        }
        assert_eq!(p.current_slide(), len - 1);
    }

    #[test]
    fn test_home_and_end() {
        let mut p = presenter();
        p.handle_key(InputKey::End);
        assert_eq!(p.current_slide(), Deck::sample().len() - 1);
        p.handle_key(InputKey::Home);
        assert_eq!(p.current_slide(), 0);
    }

    #[test]
    fn test_vim_style_keys() {
        let mut p = presenter();
        p.handle_key(InputKey::Char('l'));
        assert_eq!(p.current_slide(), 1);
        p.handle_key(InputKey::Char('h'));
        assert_eq!(p.current_slide(), 0);
    }

    #[test]
    fn test_quit_keys() {
        for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
            let mut p = presenter();
            p.handle_key(key);
            assert!(p.should_quit());
        }
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut p = presenter();
        p.handle_key(InputKey::Char('z'));
        assert_eq!(p.current_slide(), 0);
        assert!(!p.should_quit());
    }

    #[test]
    fn test_view_draws_title_slide() {
        let p = presenter();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| p.view(frame)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        // Sample deck's first slide heading, uppercased by default rules
        assert!(content.contains("TERMDECK"));
        // Progress indicator present
        assert!(content.contains("ᗧ"));
    }
}
