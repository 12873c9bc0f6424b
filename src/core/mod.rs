//! Core types: RNG and configuration.
//!
//! These are the pieces every session is built from. Applications supply
//! them at construction rather than through globals.

pub mod rng;
pub mod config;

pub use rng::DrawRng;
pub use config::{
    DeckCatalog, DeckEntry, ExhaustionPolicy, SessionConfig, DEFAULT_ANIMATION_DURATION,
};
