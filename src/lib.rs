//! # deck-draw
//!
//! Draw random cards from a loaded deck, with or without replacement,
//! behind an optional reveal animation, and step back and forth through
//! what has been drawn.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The session never renders. It reports to a
//!    `Presenter` at defined transition points.
//!
//! 2. **No Hidden Time**: Animated reveals are deferred values the host
//!    completes by polling with the current `Instant`. No threads, no
//!    runtime.
//!
//! 3. **Configuration Over Globals**: The deck catalog and session settings
//!    are plain values passed in at construction.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration (session settings, deck catalog)
//! - `cards`: Cards, decks and draw pools
//! - `session`: The draw and history state machine
//! - `presenter`: Callbacks into the presentation layer
//! - `loader`: Fetching and parsing deck files

pub mod core;
pub mod cards;
pub mod session;
pub mod presenter;
pub mod loader;

// Re-export commonly used types
pub use crate::core::{DeckCatalog, DeckEntry, DrawRng, ExhaustionPolicy, SessionConfig};

pub use crate::cards::{Card, Deck, Pool};

pub use crate::session::{
    DeckSession, Direction, DrawOutcome, History, NavButtons, PendingReveal, SessionPhase,
    SessionStatus,
};

pub use crate::presenter::{
    NullPresenter, PresentationEvent, Presenter, RecordingPresenter, TracingPresenter,
};

pub use crate::loader::{DeckLoader, DeckSource, DirectorySource, LoadError, MemorySource};
