//! Deck state as reported by the service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};

/// Snapshot of a game's undealt deck.
///
/// Always overwritten wholesale from a `GET /games/{id}/deck` response.
/// When populated by the service, `total_cards` equals both the sum of
/// `suit_counts` and the length of `sorted_cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckInfo {
    pub total_cards: u32,
    pub suit_counts: BTreeMap<Suit, u32>,
    pub sorted_cards: Vec<Card>,
}

impl DeckInfo {
    /// The no-game default: zero cards, every suit present at zero.
    pub fn empty() -> Self {
        Self {
            total_cards: 0,
            suit_counts: Suit::ALL.iter().map(|&s| (s, 0)).collect(),
            sorted_cards: Vec::new(),
        }
    }
}

impl Default for DeckInfo {
    fn default() -> Self {
        Self::empty()
    }
}
