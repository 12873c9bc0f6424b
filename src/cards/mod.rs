//! Card records, decks and draw pools.
//!
//! - `Card`: one record from a deck file
//! - `Deck`: the full card list of a load
//! - `Pool`: cards still eligible in the current cycle

mod card;
mod deck;

pub use card::Card;
pub use deck::{Deck, Pool};
