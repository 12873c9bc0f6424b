//! Deck loading.
//!
//! A [`DeckLoader`] resolves a catalog name to a file, fetches the file from
//! a [`DeckSource`], parses it as a JSON list of cards, and only then hands
//! the cards to the session. A failure at any step leaves the session as it
//! was.
//!
//! ## Example
//!
//! ```
//! use deck_draw::core::{DeckCatalog, SessionConfig};
//! use deck_draw::loader::{DeckLoader, MemorySource};
//! use deck_draw::session::DeckSession;
//!
//! let catalog = DeckCatalog::new().with_deck("Colors", "colors.json");
//! let source = MemorySource::new()
//!     .with_file("colors.json", r#"[{"content": "red"}, {"content": "blue"}]"#);
//! let loader = DeckLoader::new(catalog, source);
//!
//! let mut session = DeckSession::new(SessionConfig::default());
//! loader.load("Colors", &mut session).unwrap();
//! assert_eq!(session.status().total, 2);
//!
//! assert!(loader.load("Shapes", &mut session).is_err());
//! assert_eq!(session.status().total, 2);
//! ```

mod source;

pub use source::{DeckSource, DirectorySource, MemorySource};

use std::path::PathBuf;

use tracing::{info, warn};

use crate::cards::Card;
use crate::core::DeckCatalog;
use crate::presenter::Presenter;
use crate::session::DeckSession;

/// Why a deck could not be loaded.
///
/// Every variant means the deck source is unavailable; none of them change
/// session state.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unknown deck: {0}")]
    UnknownDeck(String),

    #[error("deck file not found: {0}")]
    NotFound(String),

    #[error("cannot read deck file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse deck file contents: a JSON array of card records.
pub fn parse_deck(file: &str, text: &str) -> Result<Vec<Card>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        file: file.to_string(),
        source,
    })
}

/// Loads catalog decks from a source into sessions.
#[derive(Clone, Debug)]
pub struct DeckLoader<S: DeckSource> {
    catalog: DeckCatalog,
    source: S,
}

impl<S: DeckSource> DeckLoader<S> {
    /// Create a loader over an immutable catalog.
    pub fn new(catalog: DeckCatalog, source: S) -> Self {
        Self { catalog, source }
    }

    #[must_use]
    pub fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse the cards of a catalog deck.
    pub fn fetch(&self, deck: &str) -> Result<Vec<Card>, LoadError> {
        let entry = self
            .catalog
            .get(deck)
            .ok_or_else(|| LoadError::UnknownDeck(deck.to_string()))?;
        self.source.fetch(&entry.file)
    }

    /// Load a catalog deck into `session`.
    ///
    /// On failure the presenter is told and the session keeps its deck,
    /// pool and history.
    pub fn load<P: Presenter>(
        &self,
        deck: &str,
        session: &mut DeckSession<P>,
    ) -> Result<(), LoadError> {
        match self.fetch(deck) {
            Ok(cards) => {
                info!(deck, cards = cards.len(), "loading deck");
                session.load_deck(cards);
                Ok(())
            }
            Err(error) => {
                warn!(deck, %error, "deck unavailable");
                session.presenter_mut().on_load_failed(&error);
                Err(error)
            }
        }
    }
}
