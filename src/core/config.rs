//! Session and catalog configuration.
//!
//! Applications configure the crate at startup by providing:
//! - `SessionConfig`: Reveal delay, exhaustion policy, RNG seed
//! - `DeckCatalog`: The selectable decks (display name -> file)
//!
//! Both are plain immutable values handed to the session and loader at
//! construction. Nothing here is process-global.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Default reveal delay, matching the shuffle animation length.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(800);

/// What a draw does when the pool has run dry.
///
/// Neither policy draws a card on the call that discovers exhaustion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Refill the pool from the deck, keep history, report exhaustion.
    /// The next draw picks from the refilled pool.
    #[default]
    AutoRefill,
    /// Report exhaustion and stay exhausted until an explicit reset.
    ManualReset,
}

/// Configuration for a `DeckSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long an animated draw keeps the session locked before the
    /// reveal is emitted.
    #[serde(with = "duration_millis")]
    pub animation_duration: Duration,

    /// Behaviour of `draw` on an empty pool.
    pub exhaustion_policy: ExhaustionPolicy,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            animation_duration: DEFAULT_ANIMATION_DURATION,
            exhaustion_policy: ExhaustionPolicy::AutoRefill,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the reveal delay.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the exhaustion policy.
    #[must_use]
    pub fn with_exhaustion_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion_policy = policy;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// One selectable deck: a display name and the file it is loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Human-readable name (shown in the deck picker).
    pub name: String,

    /// File name resolved by the deck source.
    pub file: String,
}

impl DeckEntry {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// Ordered table of selectable decks.
///
/// Entry order is preserved for display. Lookup works by display name
/// or by file name.
#[derive(Clone, Debug, Default)]
pub struct DeckCatalog {
    entries: Vec<DeckEntry>,
    by_name: FxHashMap<String, usize>,
}

impl DeckCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The decks shipped with the stock app.
    #[must_use]
    pub fn default_catalog() -> Self {
        Self::new()
            .with_deck("Myśl jak każdy!", "mysl_jak_kazdy.json")
            .with_deck(
                "Myśl jak każdy! (bez jokerów)",
                "mysl_jak_kazdy_bez_jokerow.json",
            )
            .with_deck("Myśl jak każdy! (jokery)", "mysl_jak_kazdy_jokery.json")
    }

    /// Add a deck (builder pattern).
    ///
    /// A later entry with the same name replaces the earlier one in place.
    #[must_use]
    pub fn with_deck(mut self, name: impl Into<String>, file: impl Into<String>) -> Self {
        self.insert(DeckEntry::new(name, file));
        self
    }

    /// Add a deck entry.
    pub fn insert(&mut self, entry: DeckEntry) {
        match self.by_name.get(&entry.name) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.by_name.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up an entry by display name, falling back to file name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DeckEntry> {
        self.by_name
            .get(key)
            .map(|&idx| &self.entries[idx])
            .or_else(|| self.entries.iter().find(|e| e.file == key))
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Number of decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DeckEntry> for DeckCatalog {
    fn from_iter<T: IntoIterator<Item = DeckEntry>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
