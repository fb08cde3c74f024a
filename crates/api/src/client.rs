//! reqwest-backed implementation of [`GameService`].

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use cardtable_protocol::{
    AddPlayerRequest, Card, DealRequest, DeckInfo, GameCreated, GameSummary, PlayerCreated,
    PlayerScore,
};

use crate::error::ApiError;
use crate::service::{ApiFuture, GameService};

/// Default service origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the game service.
///
/// Stateless: every call maps to exactly one request against the configured
/// origin.
#[derive(Debug, Clone)]
pub struct GameApi {
    base_url: String,
    http: reqwest::Client,
}

impl GameApi {
    /// Creates a client against the given origin (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn list_games(&self) -> Result<Vec<GameSummary>, ApiError> {
        let resp = self.http.get(self.url("/games")).send().await?;
        let resp = expect_success(resp, "Failed to fetch games list").await?;
        Ok(resp.json().await?)
    }

    pub async fn create_game(&self) -> Result<GameCreated, ApiError> {
        let resp = self.http.post(self.url("/games")).send().await?;
        let resp = expect_created(resp, "Failed to create game").await?;
        let game: GameCreated = resp.json().await?;
        debug!(game_id = %game.id, "created game");
        Ok(game)
    }

    pub async fn delete_game(&self, game_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/games/{game_id}")))
            .send()
            .await?;
        expect_success(resp, "Failed to close game").await?;
        debug!(game_id, "deleted game");
        Ok(())
    }

    pub async fn add_deck(&self, game_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/games/{game_id}/add-deck")))
            .send()
            .await?;
        expect_success(resp, "Failed to add a deck").await?;
        Ok(())
    }

    pub async fn shuffle(&self, game_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/games/{game_id}/shuffle")))
            .send()
            .await?;
        expect_success(resp, "Failed to shuffle").await?;
        Ok(())
    }

    pub async fn add_player(&self, game_id: &str, name: &str) -> Result<PlayerCreated, ApiError> {
        let req = AddPlayerRequest { name: name.into() };
        let resp = self
            .http
            .post(self.url(&format!("/games/{game_id}/players")))
            .json(&req)
            .send()
            .await?;
        let resp = expect_created(resp, "Failed to add a player").await?;
        Ok(resp.json().await?)
    }

    pub async fn remove_player(&self, game_id: &str, player_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/games/{game_id}/players/{player_id}")))
            .send()
            .await?;
        expect_success(resp, "Failed to remove player").await?;
        debug!(game_id, player_id, "removed player");
        Ok(())
    }

    pub async fn deck_info(&self, game_id: &str) -> Result<DeckInfo, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/games/{game_id}/deck")))
            .send()
            .await?;
        let resp = expect_success(resp, "Failed to get deck data").await?;
        Ok(resp.json().await?)
    }

    pub async fn player_scores(&self, game_id: &str) -> Result<Vec<PlayerScore>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/games/{game_id}/players")))
            .send()
            .await?;
        let resp = expect_success(resp, "Failed to retrieve player scores").await?;
        Ok(resp.json().await?)
    }

    pub async fn player_hand(&self, game_id: &str, player_id: &str) -> Result<Vec<Card>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/games/{game_id}/players/{player_id}/cards")))
            .send()
            .await?;
        let fallback = format!("Failed to retrieve the hand from player {player_id}");
        let resp = expect_success(resp, &fallback).await?;
        Ok(resp.json().await?)
    }

    pub async fn deal_cards(
        &self,
        game_id: &str,
        player_id: &str,
        amount: u32,
    ) -> Result<Vec<Card>, ApiError> {
        let req = DealRequest {
            player_id: player_id.into(),
            amount,
        };
        let resp = self
            .http
            .post(self.url(&format!("/games/{game_id}/deal-cards")))
            .json(&req)
            .send()
            .await?;
        let resp = expect_created(resp, "Failed to deal cards").await?;
        let cards: Vec<Card> = resp.json().await?;
        debug!(game_id, player_id, dealt = cards.len(), "dealt cards");
        Ok(cards)
    }
}

impl Default for GameApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GameService for GameApi {
    fn list_games(&self) -> ApiFuture<'_, Vec<GameSummary>> {
        Box::pin(self.list_games())
    }

    fn create_game(&self) -> ApiFuture<'_, GameCreated> {
        Box::pin(self.create_game())
    }

    fn delete_game<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(self.delete_game(game_id))
    }

    fn add_deck<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(self.add_deck(game_id))
    }

    fn shuffle<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(self.shuffle(game_id))
    }

    fn add_player<'a>(&'a self, game_id: &'a str, name: &'a str) -> ApiFuture<'a, PlayerCreated> {
        Box::pin(self.add_player(game_id, name))
    }

    fn remove_player<'a>(&'a self, game_id: &'a str, player_id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(self.remove_player(game_id, player_id))
    }

    fn deck_info<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, DeckInfo> {
        Box::pin(self.deck_info(game_id))
    }

    fn player_scores<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, Vec<PlayerScore>> {
        Box::pin(self.player_scores(game_id))
    }

    fn player_hand<'a>(&'a self, game_id: &'a str, player_id: &'a str) -> ApiFuture<'a, Vec<Card>> {
        Box::pin(self.player_hand(game_id, player_id))
    }

    fn deal_cards<'a>(
        &'a self,
        game_id: &'a str,
        player_id: &'a str,
        amount: u32,
    ) -> ApiFuture<'a, Vec<Card>> {
        Box::pin(self.deal_cards(game_id, player_id, amount))
    }
}

/// Error body the service emits from its 400/404 handlers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Passes through any 2xx response, else builds a [`ApiError::RequestFailed`].
async fn expect_success(resp: Response, fallback: &str) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(error_from_response(resp, fallback).await)
    }
}

/// Passes through a 201 response, else builds a [`ApiError::RequestFailed`].
///
/// Create-style endpoints answer 201 specifically; anything else (even
/// another 2xx) is treated as a failure.
async fn expect_created(resp: Response, fallback: &str) -> Result<Response, ApiError> {
    if resp.status() == StatusCode::CREATED {
        Ok(resp)
    } else {
        Err(error_from_response(resp, fallback).await)
    }
}

async fn error_from_response(resp: Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::RequestFailed(error_message(status, &body, fallback))
}

/// Extracts the service's `error` message from a failure body, falling back
/// to a generic description carrying the status code.
fn error_message(status: StatusCode, body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("{fallback} (status {status})"))
}
