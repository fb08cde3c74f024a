//! Lobby store operations.

use cardtable_api::GameService;
use cardtable_protocol::GameSummary;
use cardtable_status::StatusLine;
use tracing::debug;

use crate::confirm::ConfirmPrompt;

/// The set of known games plus the current selection.
///
/// The selected id is the key the active-game session store is rebuilt
/// from; this store never touches session state directly.
#[derive(Debug, Default)]
pub struct LobbyStore {
    games: Vec<GameSummary>,
    selected: Option<String>,
}

impl LobbyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last fetched game list.
    pub fn games(&self) -> &[GameSummary] {
        &self.games
    }

    /// The currently selected game id, if any.
    pub fn selected_game(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Fetches the game list and replaces it wholesale.
    ///
    /// On failure the prior list stays untouched and the error goes to the
    /// status line.
    pub async fn refresh(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        match api.list_games().await {
            Ok(games) => {
                debug!(count = games.len(), "refreshed game list");
                self.games = games;
            }
            Err(e) => status.error(e),
        }
    }

    /// Creates a game on the service, selects it, and refreshes the list.
    ///
    /// Partial failure (create succeeds, refresh fails) leaves the new game
    /// selected and the list stale until the next refresh. Returns the new
    /// game id when creation succeeded.
    pub async fn create_and_select(
        &mut self,
        api: &dyn GameService,
        status: &mut StatusLine,
    ) -> Option<String> {
        status.info("Creating a new game...");
        let game = match api.create_game().await {
            Ok(game) => game,
            Err(e) => {
                status.error(e);
                return None;
            }
        };

        self.selected = Some(game.id.clone());
        status.info(format!("Game created: {}. Add decks and players.", game.id));
        self.refresh(api, status).await;
        Some(game.id)
    }

    /// Deletes a game after interactive confirmation, then refreshes the
    /// list.
    ///
    /// A declined prompt is a full no-op. If the closed game was the
    /// selected one the selection is cleared; returns `true` in that case
    /// so the caller can tear down the active-game session.
    pub async fn close_game(
        &mut self,
        api: &dyn GameService,
        confirm: &dyn ConfirmPrompt,
        status: &mut StatusLine,
        game_id: &str,
    ) -> bool {
        if !confirm.confirm(&format!("Are you sure you want to close the game {game_id}?")) {
            return false;
        }

        if let Err(e) = api.delete_game(game_id).await {
            status.error(e);
            return false;
        }

        status.info(format!("Game {game_id} closed."));
        self.refresh(api, status).await;

        if self.selected.as_deref() == Some(game_id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    /// Pure local selection change; no network effect.
    ///
    /// A changed id invalidates the previous active-game session wholesale —
    /// the caller rebuilds it rather than patching it.
    pub fn select(&mut self, game_id: Option<String>) {
        self.selected = game_id;
    }
}
