//! Linear draw history with a replay cursor.
//!
//! Drawing appends at the cursor and drops anything after it, the same way
//! an editor's undo stack loses its redo tail when you type after undoing.

use im::Vector;

use super::outcome::Direction;
use crate::cards::Card;

/// Cards drawn since the last reset, plus a cursor into them.
///
/// The cursor is `None` before the first draw and otherwise always a valid
/// index, so `-1 <= index <= len - 1` holds by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vector<Card>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, `None` when nothing has been drawn.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor as a signed index where `-1` means "before the first draw".
    #[must_use]
    pub fn index(&self) -> isize {
        self.cursor
            .and_then(|c| isize::try_from(c).ok())
            .unwrap_or(-1)
    }

    /// Card under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.entries.get(index)
    }

    /// Iterate over recorded draws, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter()
    }

    /// Record a new draw: drop everything after the cursor, append, and
    /// move the cursor to the new entry.
    pub fn record(&mut self, card: Card) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push_back(card);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move the cursor one step. Returns the card now under the cursor, or
    /// `None` (cursor unchanged) if the step would leave the history.
    pub fn step(&mut self, direction: Direction) -> Option<&Card> {
        let current = self.cursor?;
        let next = match direction {
            Direction::Back => current.checked_sub(1)?,
            Direction::Forward => current + 1,
        };
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entries.get(next)
    }

    /// True if there is an earlier entry to step back to.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// True if there is a later entry to step forward to.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Forget all draws.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
