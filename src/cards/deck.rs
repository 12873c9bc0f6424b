//! Decks and draw pools.
//!
//! A `Deck` is the full card list from one load. A `Pool` is the part of
//! the deck still eligible for a draw in the current cycle. Both use `im`
//! persistent vectors, so refilling a pool from its deck is an O(1) clone.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// The full, ordered card list of one loaded deck.
///
/// Immutable once built; a new load replaces the whole deck. Serializes as
/// a bare card list, the same shape as a deck file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck from a card list.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over cards in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// A fresh pool holding every card of this deck.
    #[must_use]
    pub fn fresh_pool(&self) -> Pool {
        Pool {
            cards: self.cards.clone(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Cards not yet drawn in the current no-replacement cycle.
///
/// Always a sub-multiset of the deck it was created from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    cards: Vector<Card>,
}

impl Pool {
    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look at a card without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove and return the card at `index`.
    ///
    /// Order of the remaining cards is not significant.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Iterate over remaining cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Check that every card here appears in `deck` at least as many times.
    #[must_use]
    pub fn is_subset_of(&self, deck: &Deck) -> bool {
        let mut counts: FxHashMap<&Card, usize> = FxHashMap::default();
        for card in deck.iter() {
            *counts.entry(card).or_default() += 1;
        }
        self.cards.iter().all(|card| match counts.get_mut(card) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
    }
}
