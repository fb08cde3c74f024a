//! Session store operations.

use cardtable_api::GameService;
use cardtable_protocol::{Card, DeckInfo, PlayerScore};
use cardtable_status::StatusLine;
use futures_util::join;
use tracing::debug;

use crate::confirm::ConfirmPrompt;
use crate::reconcile::reconcile_roster;
use crate::types::Player;

/// State scoped to the currently selected game.
///
/// The store exclusively owns every session entity; callers get `&`-views
/// plus async operations. Every network failure is converted to a status
/// line message at the operation boundary — nothing propagates.
#[derive(Debug)]
pub struct SessionStore {
    game_id: Option<String>,
    /// Bumped on every (re)activation; in-flight fetches from an older
    /// session carry a stale value and their completions are discarded.
    epoch: u64,
    players: Vec<Player>,
    deck_info: DeckInfo,
    scores: Vec<PlayerScore>,
    selected_player: Option<String>,
    new_player_name: String,
    deal_amount: u32,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            game_id: None,
            epoch: 0,
            players: Vec::new(),
            deck_info: DeckInfo::empty(),
            scores: Vec::new(),
            selected_player: None,
            new_player_name: String::new(),
            deal_amount: 0,
        }
    }

    // -- read accessors -----------------------------------------------------

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck_info(&self) -> &DeckInfo {
        &self.deck_info
    }

    pub fn player_scores(&self) -> &[PlayerScore] {
        &self.scores
    }

    /// The selected player resolved against the current roster.
    ///
    /// A player dropped by reconciliation resolves to `None`, so they can
    /// no longer be dealt to.
    pub fn selected_player(&self) -> Option<&Player> {
        let id = self.selected_player.as_deref()?;
        self.players.iter().find(|p| p.id == id)
    }

    pub fn new_player_name(&self) -> &str {
        &self.new_player_name
    }

    pub fn deal_amount(&self) -> u32 {
        self.deal_amount
    }

    // -- pure local setters -------------------------------------------------

    pub fn select_player(&mut self, player_id: Option<String>) {
        self.selected_player = player_id;
    }

    pub fn set_new_player_name(&mut self, name: impl Into<String>) {
        self.new_player_name = name.into();
    }

    pub fn set_deal_amount(&mut self, amount: u32) {
        self.deal_amount = amount;
    }

    // -- session lifecycle --------------------------------------------------

    /// Rebuilds the session for a newly selected game id.
    ///
    /// Call exactly once per change of the selection. The previous session
    /// is discarded wholesale and its in-flight fetches invalidated. With a
    /// game selected, deck info and player scores are fetched concurrently;
    /// each completion populates only its own slice, in whichever order it
    /// lands.
    pub async fn activate(
        &mut self,
        api: &dyn GameService,
        status: &mut StatusLine,
        game_id: Option<String>,
    ) {
        let token = self.begin(game_id);

        let Some(id) = self.game_id.clone() else {
            status.info("Welcome! Create or select a game.");
            return;
        };
        status.info(format!("Game {id} loaded."));

        let (deck, scores) = join!(api.deck_info(&id), api.player_scores(&id));
        match deck {
            Ok(deck) => {
                self.apply_deck_info(token, deck);
            }
            Err(e) => status.error(e),
        }
        match scores {
            Ok(scores) => {
                self.apply_player_scores(token, scores);
            }
            Err(e) => status.error(e),
        }
    }

    /// Resets every slice to its default and invalidates older fetches.
    fn begin(&mut self, game_id: Option<String>) -> u64 {
        self.epoch += 1;
        self.game_id = game_id;
        self.players.clear();
        self.deck_info = DeckInfo::empty();
        self.scores.clear();
        self.selected_player = None;
        self.new_player_name.clear();
        self.deal_amount = 0;
        self.epoch
    }

    // -- epoch-guarded state transitions ------------------------------------

    fn apply_deck_info(&mut self, token: u64, deck: DeckInfo) -> bool {
        if token != self.epoch {
            debug!(token, epoch = self.epoch, "discarding stale deck info");
            return false;
        }
        self.deck_info = deck;
        true
    }

    fn apply_player_scores(&mut self, token: u64, scores: Vec<PlayerScore>) -> bool {
        if token != self.epoch {
            debug!(token, epoch = self.epoch, "discarding stale player scores");
            return false;
        }
        self.players = reconcile_roster(std::mem::take(&mut self.players), &scores);
        self.scores = scores;
        true
    }

    fn apply_player_hand(&mut self, token: u64, player_id: &str, hand: Vec<Card>) -> bool {
        if token != self.epoch {
            debug!(token, epoch = self.epoch, "discarding stale hand");
            return false;
        }
        if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
            player.hand = hand;
        }
        true
    }

    // -- fetches ------------------------------------------------------------

    /// Replaces the deck snapshot wholesale. Idempotent; safe to repeat.
    pub async fn fetch_deck_info(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            return;
        };
        let token = self.epoch;
        match api.deck_info(&id).await {
            Ok(deck) => {
                self.apply_deck_info(token, deck);
            }
            Err(e) => status.error(e),
        }
    }

    /// Replaces the scoreboard wholesale and reconciles the roster from it.
    pub async fn fetch_player_scores(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            return;
        };
        let token = self.epoch;
        match api.player_scores(&id).await {
            Ok(scores) => {
                self.apply_player_scores(token, scores);
            }
            Err(e) => status.error(e),
        }
    }

    /// Replaces one player's hand in place.
    ///
    /// On failure the previous hand (possibly empty) stays untouched; there
    /// is no retry, so a hand can stay stale until the next explicit fetch.
    pub async fn fetch_player_hand(
        &mut self,
        api: &dyn GameService,
        status: &mut StatusLine,
        player_id: &str,
    ) {
        let Some(id) = self.game_id.clone() else {
            return;
        };
        let token = self.epoch;
        match api.player_hand(&id, player_id).await {
            Ok(hand) => {
                self.apply_player_hand(token, player_id, hand);
            }
            Err(e) => status.error(e),
        }
    }

    // -- mutations ----------------------------------------------------------

    /// Adds a standard 52-card deck to the game's shoe, then refreshes the
    /// deck snapshot.
    pub async fn add_deck(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            status.info("Create a game before adding a deck.");
            return;
        };
        match api.add_deck(&id).await {
            Ok(()) => {
                status.info("A standard deck of 52 cards was added.");
                self.fetch_deck_info(api, status).await;
            }
            Err(e) => status.error(e),
        }
    }

    /// Shuffles the game's deck server-side (the order is opaque to the
    /// client), then refreshes the deck snapshot.
    pub async fn shuffle(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            status.info("Create a game before shuffling.");
            return;
        };
        match api.shuffle(&id).await {
            Ok(()) => {
                status.info("Deck shuffled.");
                self.fetch_deck_info(api, status).await;
            }
            Err(e) => status.error(e),
        }
    }

    /// Adds a player named by the pending input.
    ///
    /// Guarded on a selected game and a non-empty trimmed name; guard
    /// failures issue no network call and change no state. On success the
    /// player and a zero score row are inserted optimistically — the next
    /// scores fetch overwrites both authoritatively. The first player ever
    /// added becomes the selected player.
    pub async fn add_player(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            status.info("Create a game before adding players.");
            return;
        };
        let name = self.new_player_name.trim().to_owned();
        if name.is_empty() {
            status.info("Insert a name for the player.");
            return;
        }

        match api.add_player(&id, &name).await {
            Ok(created) => {
                let first = self.players.is_empty();
                self.players.push(Player::new(&created.id, &name));
                self.scores.push(PlayerScore {
                    player_id: created.id.clone(),
                    player_name: name.clone(),
                    total_value: 0,
                });
                self.new_player_name.clear();
                status.info(format!("Player {name} added."));
                if first {
                    self.selected_player = Some(created.id);
                }
            }
            Err(e) => status.error(e),
        }
    }

    /// Removes a player after interactive confirmation.
    ///
    /// Never splices the roster directly: on success it refetches the
    /// scores and lets reconciliation drop the player.
    pub async fn remove_player(
        &mut self,
        api: &dyn GameService,
        confirm: &dyn ConfirmPrompt,
        status: &mut StatusLine,
        player_id: &str,
    ) {
        let name = self
            .players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| player_id.to_owned());

        let Some(id) = self.game_id.clone() else {
            status.info("Please select a game.");
            return;
        };
        if !confirm.confirm(&format!("Are you sure you want to remove player {name}?")) {
            return;
        }

        match api.remove_player(&id, player_id).await {
            Ok(()) => {
                status.info(format!("Player {name} removed."));
                self.fetch_player_scores(api, status).await;
            }
            Err(e) => status.error(e),
        }
    }

    /// Deals the pending amount to the selected player, then resynchronizes
    /// hand, deck, and scores in that order.
    ///
    /// The deck may hold fewer cards than requested; the status message
    /// reports the count the service actually returned.
    pub async fn deal_cards(&mut self, api: &dyn GameService, status: &mut StatusLine) {
        let Some(id) = self.game_id.clone() else {
            status.info("Load a game before dealing cards.");
            return;
        };
        let Some((player_id, player_name)) = self
            .selected_player()
            .map(|p| (p.id.clone(), p.name.clone()))
        else {
            status.info("Please select a player for dealing cards.");
            return;
        };

        match api.deal_cards(&id, &player_id, self.deal_amount).await {
            Ok(cards) => {
                status.info(format!("{} cards dealt to {player_name}.", cards.len()));
                self.fetch_player_hand(api, status, &player_id).await;
                self.fetch_deck_info(api, status).await;
                self.fetch_player_scores(api, status).await;
            }
            Err(e) => status.error(e),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
