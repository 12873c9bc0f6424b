//! Deck draw session: the draw and history state machine.
//!
//! A `DeckSession` owns one loaded deck, the pool of cards still eligible
//! for a draw, the draw history with its replay cursor, and the animation
//! lock. Every transition reports to a [`Presenter`].
//!
//! ## States
//!
//! ```text
//! Empty --load--> Ready --draw (last card)--> Exhausted --refill/reset--> Ready
//! ```
//!
//! Orthogonal to the phase, an animated draw locks the session until its
//! reveal completes. Draws issued while locked are dropped, not queued.
//! History navigation ignores the lock.
//!
//! ## Example
//!
//! ```
//! use deck_draw::cards::Card;
//! use deck_draw::core::SessionConfig;
//! use deck_draw::session::{DeckSession, Direction, DrawOutcome};
//!
//! let mut session = DeckSession::new(SessionConfig::default().with_seed(7));
//! session.load_deck(vec![Card::new("a"), Card::new("b")]);
//!
//! let first = session.draw().into_card().unwrap();
//! let second = session.draw().into_card().unwrap();
//! assert_ne!(first, second);
//! assert_eq!(session.draw(), DrawOutcome::Exhausted);
//!
//! assert_eq!(session.navigate(Direction::Back), DrawOutcome::Drawn(first));
//! ```

mod history;
mod outcome;
mod reveal;

pub use history::History;
pub use outcome::{Direction, DrawOutcome, NavButtons, SessionPhase, SessionStatus};
pub use reveal::PendingReveal;

use std::time::Instant;

use tracing::{debug, info};

use crate::cards::{Card, Deck, Pool};
use crate::core::{DrawRng, ExhaustionPolicy, SessionConfig};
use crate::presenter::{NullPresenter, Presenter};

/// Single-panel draw session.
///
/// Generic over the presenter so hosts plug in their own rendering; the
/// default discards notifications.
#[derive(Debug)]
pub struct DeckSession<P: Presenter = NullPresenter> {
    config: SessionConfig,
    rng: DrawRng,
    presenter: P,

    deck: Deck,
    pool: Pool,
    history: History,

    replacement: bool,
    animated: bool,

    locked: bool,
    pending: Option<PendingReveal>,
    reveal_generation: u64,
}

impl DeckSession {
    /// Create a session that reports to nobody.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_presenter(config, NullPresenter)
    }
}

impl<P: Presenter> DeckSession<P> {
    /// Create a session reporting to `presenter`.
    pub fn with_presenter(config: SessionConfig, presenter: P) -> Self {
        let rng = DrawRng::from_seed_or_entropy(config.seed);
        debug!(seed = rng.seed(), "session created");
        Self {
            config,
            rng,
            presenter,
            deck: Deck::default(),
            pool: Pool::default(),
            history: History::new(),
            replacement: false,
            animated: false,
            locked: false,
            pending: None,
            reveal_generation: 0,
        }
    }

    // === Inputs ===

    /// Replace the deck and start over.
    ///
    /// Any in-flight animated reveal is cancelled: its card came from the
    /// discarded deck.
    pub fn load_deck(&mut self, cards: Vec<Card>) {
        self.cancel_pending_reveal();
        self.deck = Deck::new(cards);
        info!(total = self.deck.len(), "deck loaded");
        self.reset_state();
        self.presenter.on_ready(self.deck.len());
    }

    /// Refill the pool from the deck and clear history.
    pub fn reset_state(&mut self) {
        self.pool = self.deck.fresh_pool();
        self.history.clear();
        debug!(pool = self.pool.len(), "session reset");
        self.report_status();
        self.report_nav();
    }

    /// Switch between drawing with and without replacement.
    ///
    /// Always resets pool and history, even if the mode is unchanged. A
    /// pending reveal is kept and still completes; its card is from this deck.
    pub fn set_replacement_mode(&mut self, enabled: bool) {
        self.replacement = enabled;
        debug!(replacement = enabled, "replacement mode set");
        self.reset_state();
    }

    /// Choose whether `request_draw` uses the long reveal animation.
    pub fn set_animated_mode(&mut self, enabled: bool) {
        self.animated = enabled;
    }

    /// Draw a card and reveal it immediately.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.locked {
            debug!("draw dropped while animation is running");
            return DrawOutcome::Blocked;
        }
        let outcome = self.draw_logical();
        if let DrawOutcome::Drawn(card) = &outcome {
            self.presenter.on_card_revealed(card);
        }
        outcome
    }

    /// Draw a card now and reveal it after the animation delay.
    ///
    /// The random pick and all pool/history updates happen here, so rapid
    /// repeated requests cannot race on the pool. Only the reveal waits for
    /// [`poll`](Self::poll) or [`complete_reveal`](Self::complete_reveal).
    pub fn begin_animated_draw(&mut self, now: Instant) -> DrawOutcome {
        if self.locked {
            debug!("animated draw dropped while animation is running");
            return DrawOutcome::Blocked;
        }
        let outcome = self.draw_logical();
        if let DrawOutcome::Drawn(card) = &outcome {
            self.reveal_generation += 1;
            self.locked = true;
            self.pending = Some(PendingReveal::new(
                card.clone(),
                now + self.config.animation_duration,
                self.reveal_generation,
            ));
            self.presenter.on_shuffle_started();
        }
        outcome
    }

    /// Draw using the current animated-mode setting.
    pub fn request_draw(&mut self, now: Instant) -> DrawOutcome {
        if self.animated {
            self.begin_animated_draw(now)
        } else {
            self.draw()
        }
    }

    /// Complete the pending reveal if its delay has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Card> {
        let generation = self
            .pending
            .as_ref()
            .filter(|p| p.is_due(now))?
            .generation();
        self.complete_reveal(generation)
    }

    /// Complete the pending reveal identified by `generation`, regardless of
    /// time. Returns `None` if that reveal is no longer pending.
    pub fn complete_reveal(&mut self, generation: u64) -> Option<Card> {
        if self.pending.as_ref()?.generation() != generation {
            debug!(generation, "stale reveal ignored");
            return None;
        }
        let card = self.pending.take()?.into_card();
        self.locked = false;
        self.presenter.on_card_revealed(&card);
        Some(card)
    }

    /// Drop the pending reveal, if any, and release the lock.
    pub fn cancel_pending_reveal(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.generation(), "pending reveal cancelled");
        }
        self.locked = false;
    }

    /// Step through history. Allowed while locked; never touches the pool.
    pub fn navigate(&mut self, direction: Direction) -> DrawOutcome {
        let Some(card) = self.history.step(direction).cloned() else {
            return DrawOutcome::OutOfRange;
        };
        self.presenter.on_card_revealed(&card);
        self.report_nav();
        DrawOutcome::Drawn(card)
    }

    // === Queries ===

    /// Remaining / total counts.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            remaining: self.pool.len(),
            total: self.deck.len(),
        }
    }

    /// Which history buttons are usable.
    #[must_use]
    pub fn nav_buttons(&self) -> NavButtons {
        NavButtons {
            can_back: self.history.can_go_back(),
            can_forward: self.history.can_go_forward(),
        }
    }

    /// Coarse state of the session.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.deck.is_empty() {
            SessionPhase::Empty
        } else if self.pool.is_empty() {
            SessionPhase::Exhausted
        } else {
            SessionPhase::Ready
        }
    }

    /// True while an animated draw is waiting for its reveal.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The in-flight reveal, if any.
    #[must_use]
    pub fn pending_reveal(&self) -> Option<&PendingReveal> {
        self.pending.as_ref()
    }

    /// Card under the history cursor.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// History cursor, `-1` before the first draw.
    #[must_use]
    pub fn history_index(&self) -> isize {
        self.history.index()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    #[must_use]
    pub fn replacement_mode(&self) -> bool {
        self.replacement
    }

    #[must_use]
    pub fn animated_mode(&self) -> bool {
        self.animated
    }

    /// Seed of the draw RNG. Passing it to `SessionConfig::with_seed`
    /// replays the same draws for the same inputs.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the session and return its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    // === Internals ===

    /// Pick a card and update pool and history, without revealing it.
    fn draw_logical(&mut self) -> DrawOutcome {
        if self.deck.is_empty() {
            return DrawOutcome::NoDeck;
        }

        if self.pool.is_empty() {
            self.presenter.on_exhausted();
            if self.config.exhaustion_policy == ExhaustionPolicy::AutoRefill {
                self.pool = self.deck.fresh_pool();
                debug!(pool = self.pool.len(), "pool refilled after exhaustion");
                self.report_status();
            }
            return DrawOutcome::Exhausted;
        }

        let Some(index) = self.rng.pick_index(self.pool.len()) else {
            return DrawOutcome::Exhausted;
        };
        let picked = if self.replacement {
            self.pool.get(index).cloned()
        } else {
            self.pool.take(index)
        };
        let Some(card) = picked else {
            return DrawOutcome::Exhausted;
        };

        self.history.record(card.clone());
        debug!(
            content = %card.content,
            remaining = self.pool.len(),
            history = self.history.len(),
            "card drawn"
        );
        self.report_status();
        self.report_nav();
        DrawOutcome::Drawn(card)
    }

    fn report_status(&mut self) {
        self.presenter.on_status(self.pool.len(), self.deck.len());
    }

    fn report_nav(&mut self) {
        let nav = self.nav_buttons();
        self.presenter.on_nav_buttons(nav.can_back, nav.can_forward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{PresentationEvent, RecordingPresenter};
    use std::time::Duration;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|n| Card::new(*n)).collect()
    }

    fn session(names: &[&str]) -> DeckSession<RecordingPresenter> {
        let mut s = DeckSession::with_presenter(
            SessionConfig::default().with_seed(42),
            RecordingPresenter::new(),
        );
        s.load_deck(cards(names));
        s.presenter_mut().drain();
        s
    }

    #[test]
    fn test_new_session_is_empty() {
        let mut s = DeckSession::new(SessionConfig::default().with_seed(1));
        assert_eq!(s.phase(), SessionPhase::Empty);
        assert_eq!(s.draw(), DrawOutcome::NoDeck);
        assert_eq!(s.history_index(), -1);
        assert_eq!(s.status(), SessionStatus::default());
    }

    #[test]
    fn test_load_reports_status_and_ready() {
        let mut s = DeckSession::with_presenter(
            SessionConfig::default().with_seed(1),
            RecordingPresenter::new(),
        );
        s.load_deck(cards(&["a", "b", "c"]));

        assert_eq!(s.phase(), SessionPhase::Ready);
        assert_eq!(
            s.presenter().events(),
            &[
                PresentationEvent::Status { remaining: 3, total: 3 },
                PresentationEvent::NavButtons { can_back: false, can_forward: false },
                PresentationEvent::Ready { total: 3 },
            ]
        );
    }

    #[test]
    fn test_draw_without_replacement_shrinks_pool() {
        let mut s = session(&["a", "b", "c"]);

        let card = s.draw().into_card().unwrap();

        assert_eq!(s.pool().len(), 2);
        assert!(!s.pool().iter().any(|c| *c == card));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history_index(), 0);
        assert_eq!(
            s.presenter().events(),
            &[
                PresentationEvent::Status { remaining: 2, total: 3 },
                PresentationEvent::NavButtons { can_back: false, can_forward: false },
                PresentationEvent::CardRevealed(card),
            ]
        );
    }

    #[test]
    fn test_draw_with_replacement_keeps_pool() {
        let mut s = session(&["a", "b", "c"]);
        s.set_replacement_mode(true);

        for _ in 0..10 {
            assert!(s.draw().is_drawn());
            assert_eq!(s.pool().len(), 3);
        }
        assert_eq!(s.history().len(), 10);
    }

    #[test]
    fn test_auto_refill_reports_exhausted_once_then_draws() {
        let mut s = session(&["a"]);
        assert!(s.draw().is_drawn());
        assert_eq!(s.phase(), SessionPhase::Exhausted);
        s.presenter_mut().drain();

        assert_eq!(s.draw(), DrawOutcome::Exhausted);
        assert_eq!(
            s.presenter().events(),
            &[
                PresentationEvent::Exhausted,
                PresentationEvent::Status { remaining: 1, total: 1 },
            ]
        );
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert_eq!(s.history().len(), 1);

        assert_eq!(s.draw(), DrawOutcome::Drawn(Card::new("a")));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_manual_reset_policy_stays_exhausted() {
        let mut s = DeckSession::new(
            SessionConfig::default()
                .with_seed(3)
                .with_exhaustion_policy(ExhaustionPolicy::ManualReset),
        );
        s.load_deck(cards(&["a"]));
        s.draw();

        assert_eq!(s.draw(), DrawOutcome::Exhausted);
        assert_eq!(s.draw(), DrawOutcome::Exhausted);
        assert_eq!(s.phase(), SessionPhase::Exhausted);
        assert_eq!(s.history().len(), 1);

        s.reset_state();
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert!(s.history().is_empty());
        assert!(s.draw().is_drawn());
    }

    #[test]
    fn test_navigation_reports_buttons() {
        let mut s = session(&["a", "b", "c"]);
        let first = s.draw().into_card().unwrap();
        s.draw();
        s.presenter_mut().drain();

        assert_eq!(s.navigate(Direction::Back), DrawOutcome::Drawn(first.clone()));
        assert_eq!(
            s.presenter().events(),
            &[
                PresentationEvent::CardRevealed(first),
                PresentationEvent::NavButtons { can_back: false, can_forward: true },
            ]
        );
        assert_eq!(s.pool().len(), 1);
    }

    #[test]
    fn test_navigation_out_of_range_is_silent() {
        let mut s = session(&["a", "b"]);
        assert_eq!(s.navigate(Direction::Back), DrawOutcome::OutOfRange);
        s.draw();
        s.presenter_mut().drain();

        assert_eq!(s.navigate(Direction::Back), DrawOutcome::OutOfRange);
        assert_eq!(s.navigate(Direction::Forward), DrawOutcome::OutOfRange);
        assert!(s.presenter().events().is_empty());
        assert_eq!(s.history_index(), 0);
    }

    #[test]
    fn test_animated_draw_locks_until_due() {
        let mut s = session(&["a", "b", "c"]);
        let start = Instant::now();

        let card = s.begin_animated_draw(start).into_card().unwrap();
        assert!(s.is_locked());
        assert_eq!(s.pool().len(), 2);
        assert_eq!(s.presenter().last(), Some(&PresentationEvent::ShuffleStarted));
        assert_eq!(s.presenter().revealed().count(), 0);

        assert_eq!(s.poll(start + Duration::from_millis(100)), None);
        assert!(s.is_locked());

        assert_eq!(s.poll(start + Duration::from_millis(800)), Some(card.clone()));
        assert!(!s.is_locked());
        assert_eq!(s.presenter().last(), Some(&PresentationEvent::CardRevealed(card)));
        assert_eq!(s.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_locked_session_drops_draws() {
        let mut s = session(&["a", "b", "c"]);
        let now = Instant::now();
        s.begin_animated_draw(now);

        assert_eq!(s.draw(), DrawOutcome::Blocked);
        assert_eq!(s.begin_animated_draw(now), DrawOutcome::Blocked);
        assert_eq!(s.pool().len(), 2);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_navigation_bypasses_lock() {
        let mut s = session(&["a", "b", "c"]);
        let first = s.draw().into_card().unwrap();
        s.begin_animated_draw(Instant::now());

        assert_eq!(s.navigate(Direction::Back), DrawOutcome::Drawn(first));
        assert!(s.is_locked());
    }

    #[test]
    fn test_load_cancels_pending_reveal() {
        let mut s = session(&["a", "b"]);
        let now = Instant::now();
        s.begin_animated_draw(now);
        let generation = s.pending_reveal().unwrap().generation();

        s.load_deck(cards(&["x", "y"]));

        assert!(!s.is_locked());
        assert!(s.pending_reveal().is_none());
        assert_eq!(s.poll(now + Duration::from_secs(1)), None);
        assert_eq!(s.complete_reveal(generation), None);
        assert!(s.draw().is_drawn());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut s = session(&["a", "b"]);
        s.begin_animated_draw(Instant::now());
        let generation = s.pending_reveal().unwrap().generation();

        assert_eq!(s.complete_reveal(generation + 1), None);
        assert!(s.is_locked());
        assert!(s.complete_reveal(generation).is_some());
        assert!(!s.is_locked());
    }

    #[test]
    fn test_animated_draw_on_exhausted_pool_does_not_lock() {
        let mut s = session(&["a"]);
        s.draw();

        assert_eq!(s.begin_animated_draw(Instant::now()), DrawOutcome::Exhausted);
        assert!(!s.is_locked());
    }

    #[test]
    fn test_request_draw_routes_by_mode() {
        let mut s = session(&["a", "b", "c"]);
        let now = Instant::now();

        assert!(s.request_draw(now).is_drawn());
        assert!(!s.is_locked());

        s.set_animated_mode(true);
        assert!(s.animated_mode());
        assert!(s.request_draw(now).is_drawn());
        assert!(s.is_locked());
        assert_eq!(s.request_draw(now), DrawOutcome::Blocked);
    }

    #[test]
    fn test_set_replacement_mode_resets() {
        let mut s = session(&["a", "b", "c"]);
        s.draw();
        s.draw();

        s.set_replacement_mode(false);

        assert!(s.history().is_empty());
        assert_eq!(s.history_index(), -1);
        assert_eq!(s.pool().len(), 3);
        assert!(!s.replacement_mode());
    }

    #[test]
    fn test_replacement_toggle_keeps_pending_reveal() {
        let mut s = session(&["a", "b", "c"]);
        let start = Instant::now();
        let card = s.begin_animated_draw(start).into_card().unwrap();

        s.set_replacement_mode(true);

        assert!(s.is_locked());
        assert!(s.history().is_empty());
        assert_eq!(s.pool().len(), 3);
        assert_eq!(s.draw(), DrawOutcome::Blocked);
        assert!(s.history().is_empty());

        let due = start + s.config().animation_duration;
        assert_eq!(s.poll(due), Some(card.clone()));
        assert!(!s.is_locked());
        assert_eq!(s.presenter().last(), Some(&PresentationEvent::CardRevealed(card)));
        assert!(s.draw().is_drawn());
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut first = DeckSession::new(SessionConfig::default());
        first.load_deck(cards(&["a", "b", "c", "d", "e"]));
        let seed = first.rng_seed();

        let mut replay = DeckSession::new(SessionConfig::default().with_seed(seed));
        replay.load_deck(cards(&["a", "b", "c", "d", "e"]));

        for _ in 0..5 {
            assert_eq!(first.draw(), replay.draw());
        }
    }

    #[test]
    fn test_load_empty_deck() {
        let mut s = session(&["a"]);
        s.load_deck(Vec::new());

        assert_eq!(s.phase(), SessionPhase::Empty);
        assert_eq!(s.draw(), DrawOutcome::NoDeck);
    }
}
