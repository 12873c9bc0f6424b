//! Card records - static card data.
//!
//! A `Card` is what a deck file lists: the text shown on the face and
//! optional colours. Cards have no identity beyond their fields; two cards
//! with the same content and colours are interchangeable.

use serde::{Deserialize, Serialize};

/// Background spellings treated as pure black.
const BLACK_BACKGROUNDS: [&str; 3] = ["#000000", "#000", "black"];

/// A single card as loaded from a deck file.
///
/// ## Example
///
/// ```
/// use deck_draw::cards::Card;
///
/// let card: Card = serde_json::from_str(
///     r##"{"content": "Name a fruit", "backgroundColor": "#ffcc00"}"##,
/// ).unwrap();
///
/// assert_eq!(card.content, "Name a fruit");
/// assert_eq!(card.background_color.as_deref(), Some("#ffcc00"));
/// assert_eq!(card.text_color, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Text printed on the card face.
    pub content: String,

    /// CSS-style background colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// CSS-style text colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Card {
    /// Create a plain card with no colours.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            background_color: None,
            text_color: None,
        }
    }

    /// Set the background colour.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the text colour.
    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// True if the background is pure black, where a presenter should draw
    /// a lighter border so the card edge stays visible.
    #[must_use]
    pub fn has_dark_background(&self) -> bool {
        self.background_color.as_deref().is_some_and(|bg| {
            BLACK_BACKGROUNDS
                .iter()
                .any(|black| black.eq_ignore_ascii_case(bg.trim()))
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}
