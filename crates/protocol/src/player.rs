//! Player-related request and response bodies.

use serde::{Deserialize, Serialize};

/// One scoreboard row (`GET /games/{id}/players`).
///
/// The service sorts these descending by `total_value`. Besides the score
/// display, this is the client's only roster source — there is no dedicated
/// roster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: String,
    pub player_name: String,
    pub total_value: i32,
}

/// Body of a `POST /games/{id}/players` response (status 201).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCreated {
    pub id: String,
    pub name: String,
}

/// Request body for adding a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

/// Request body for dealing cards to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    pub player_id: String,
    pub amount: u32,
}
