//! Wire types for the cardtable game service HTTP API.
//!
//! Every type here mirrors a JSON body the game service sends or accepts:
//! camelCase object keys, uppercase card enum strings, UUID ids carried as
//! plain strings. The client never re-derives any of this state locally —
//! responses overwrite whatever was held before.

pub mod card;
pub mod deck;
pub mod game;
pub mod player;

// Re-export primary types for convenience.
pub use card::{Card, Rank, Suit};
pub use deck::DeckInfo;
pub use game::{GameCreated, GameSummary};
pub use player::{AddPlayerRequest, DealRequest, PlayerCreated, PlayerScore};
