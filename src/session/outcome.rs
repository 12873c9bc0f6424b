//! Outcomes and derived state reported by a session.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Result of a draw or navigation request.
///
/// None of these are failures; they are the states a request can land in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A card was drawn, or replayed from history.
    Drawn(Card),
    /// Draw dropped because a reveal animation is in progress.
    Blocked,
    /// The pool was empty; no card was drawn on this call.
    Exhausted,
    /// Navigation would leave the history.
    OutOfRange,
    /// No deck (or an empty deck) is loaded.
    NoDeck,
}

impl DrawOutcome {
    /// The card, if one was drawn or replayed.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            DrawOutcome::Drawn(card) => Some(card),
            _ => None,
        }
    }

    /// Consume the outcome and return its card.
    #[must_use]
    pub fn into_card(self) -> Option<Card> {
        match self {
            DrawOutcome::Drawn(card) => Some(card),
            _ => None,
        }
    }

    /// Check if a card was produced.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn(_))
    }
}

/// History navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Back,
    Forward,
}

/// Coarse session state.
///
/// The animation lock is orthogonal and reported by `DeckSession::is_locked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No deck loaded.
    Empty,
    /// Deck loaded, pool has cards.
    Ready,
    /// Deck loaded, pool empty.
    Exhausted,
}

/// Remaining / total card counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub remaining: usize,
    pub total: usize,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Remaining: {} / {}", self.remaining, self.total)
    }
}

/// Which history buttons should be enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavButtons {
    pub can_back: bool,
    pub can_forward: bool,
}
