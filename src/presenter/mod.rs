//! Presentation callbacks.
//!
//! The session never renders anything itself. At each state transition it
//! calls into a `Presenter`, which turns the notification into whatever the
//! host shows: DOM updates, terminal output, a test log.
//!
//! ## Implementations
//!
//! - [`NullPresenter`]: Ignores everything
//! - [`RecordingPresenter`]: Stores events in order, for tests and replay
//! - [`TracingPresenter`]: Logs events through `tracing`

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::loader::LoadError;

/// Callbacks from a `DeckSession` to the presentation layer.
///
/// All methods default to no-ops so hosts implement only what they show.
pub trait Presenter {
    /// A deck was loaded and is ready to draw from.
    fn on_ready(&mut self, _total: usize) {}

    /// Show a card face, either a fresh draw or a history replay.
    fn on_card_revealed(&mut self, _card: &Card) {}

    /// The pool ran dry.
    fn on_exhausted(&mut self) {}

    /// Remaining / total counter changed.
    fn on_status(&mut self, _remaining: usize, _total: usize) {}

    /// History navigation availability changed.
    fn on_nav_buttons(&mut self, _can_back: bool, _can_forward: bool) {}

    /// An animated draw started; show the card back until the reveal.
    fn on_shuffle_started(&mut self) {}

    /// A deck load failed. Session state is untouched.
    fn on_load_failed(&mut self, _error: &LoadError) {}
}

/// Presenter that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// A presentation notification, as recorded by [`RecordingPresenter`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationEvent {
    Ready { total: usize },
    CardRevealed(Card),
    Exhausted,
    Status { remaining: usize, total: usize },
    NavButtons { can_back: bool, can_forward: bool },
    ShuffleStarted,
    LoadFailed(String),
}

/// Presenter that records notifications in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresentationEvent>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PresentationEvent> {
        self.events.last()
    }

    /// Take all recorded events, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cards revealed so far, in order.
    pub fn revealed(&self) -> impl Iterator<Item = &Card> {
        self.events.iter().filter_map(|e| match e {
            PresentationEvent::CardRevealed(card) => Some(card),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn on_ready(&mut self, total: usize) {
        self.events.push(PresentationEvent::Ready { total });
    }

    fn on_card_revealed(&mut self, card: &Card) {
        self.events.push(PresentationEvent::CardRevealed(card.clone()));
    }

    fn on_exhausted(&mut self) {
        self.events.push(PresentationEvent::Exhausted);
    }

    fn on_status(&mut self, remaining: usize, total: usize) {
        self.events.push(PresentationEvent::Status { remaining, total });
    }

    fn on_nav_buttons(&mut self, can_back: bool, can_forward: bool) {
        self.events.push(PresentationEvent::NavButtons {
            can_back,
            can_forward,
        });
    }

    fn on_shuffle_started(&mut self) {
        self.events.push(PresentationEvent::ShuffleStarted);
    }

    fn on_load_failed(&mut self, error: &LoadError) {
        self.events.push(PresentationEvent::LoadFailed(error.to_string()));
    }
}

/// Presenter that logs every notification at `debug`, failures at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn on_ready(&mut self, total: usize) {
        tracing::debug!(total, "deck ready");
    }

    fn on_card_revealed(&mut self, card: &Card) {
        tracing::debug!(content = %card.content, "card revealed");
    }

    fn on_exhausted(&mut self) {
        tracing::debug!("pool exhausted");
    }

    fn on_status(&mut self, remaining: usize, total: usize) {
        tracing::debug!(remaining, total, "status");
    }

    fn on_nav_buttons(&mut self, can_back: bool, can_forward: bool) {
        tracing::debug!(can_back, can_forward, "nav buttons");
    }

    fn on_shuffle_started(&mut self) {
        tracing::debug!("shuffle animation started");
    }

    fn on_load_failed(&mut self, error: &LoadError) {
        tracing::warn!(%error, "deck load failed");
    }
}
