//! Session-local view types.

use cardtable_protocol::Card;

/// A player as the session sees them: identity plus the locally fetched
/// hand.
///
/// `hand` stays empty until an explicit hand fetch succeeds and is left
/// untouched when one fails. The scoreboard (and through it the roster)
/// comes from the service; the hand is the only slice enriched locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    /// A freshly known player with no fetched hand.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand: Vec::new(),
        }
    }
}
