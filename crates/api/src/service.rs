//! Abstract game service seam consumed by the stores.

use std::future::Future;
use std::pin::Pin;

use cardtable_protocol::{Card, DeckInfo, GameCreated, GameSummary, PlayerCreated, PlayerScore};

use crate::error::ApiError;

/// Boxed future returned by [`GameService`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// One method per server operation.
///
/// The stores hold a `&dyn GameService`; the app wires in [`crate::GameApi`],
/// tests wire in scripted mocks.
pub trait GameService: Send + Sync {
    fn list_games(&self) -> ApiFuture<'_, Vec<GameSummary>>;

    fn create_game(&self) -> ApiFuture<'_, GameCreated>;

    fn delete_game<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()>;

    fn add_deck<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()>;

    fn shuffle<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, ()>;

    fn add_player<'a>(&'a self, game_id: &'a str, name: &'a str) -> ApiFuture<'a, PlayerCreated>;

    fn remove_player<'a>(&'a self, game_id: &'a str, player_id: &'a str) -> ApiFuture<'a, ()>;

    fn deck_info<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, DeckInfo>;

    fn player_scores<'a>(&'a self, game_id: &'a str) -> ApiFuture<'a, Vec<PlayerScore>>;

    fn player_hand<'a>(&'a self, game_id: &'a str, player_id: &'a str) -> ApiFuture<'a, Vec<Card>>;

    fn deal_cards<'a>(
        &'a self,
        game_id: &'a str,
        player_id: &'a str,
        amount: u32,
    ) -> ApiFuture<'a, Vec<Card>>;
}
