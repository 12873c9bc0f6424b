//! Deferred reveal for animated draws.

use std::time::Instant;

use crate::cards::Card;

/// A card already drawn and waiting for its animation to finish.
///
/// Each reveal carries a generation number. Hosts that run their own timer
/// hand the generation back to `DeckSession::complete_reveal`; a reveal
/// cancelled in the meantime (by a deck load) no longer matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReveal {
    card: Card,
    due: Instant,
    generation: u64,
}

impl PendingReveal {
    pub(crate) fn new(card: Card, due: Instant, generation: u64) -> Self {
        Self {
            card,
            due,
            generation,
        }
    }

    /// The card that will be shown.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// When the reveal should happen.
    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Identifies this reveal among all reveals of the session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if the animation has run its course at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub(crate) fn into_card(self) -> Card {
        self.card
    }
}
