//! Game-level response bodies.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::player::PlayerCreated;

/// One row of the game list (`GET /games`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub player_count: u32,
}

/// Body of a `POST /games` response (status 201).
///
/// The service serializes its whole game entity. The client only acts on
/// `id`; the deck and player list of a fresh game are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreated {
    pub id: String,
    #[serde(default)]
    pub game_deck: Vec<Card>,
    #[serde(default)]
    pub players: Vec<PlayerCreated>,
}
