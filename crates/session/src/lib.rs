//! Active-game session store.
//!
//! All state scoped to one selected game id: deck snapshot, player roster,
//! scoreboard, player selection, pending inputs. Reselecting a game id
//! discards the session wholesale — nothing is migrated.
//!
//! Two rules carry the weight here:
//!
//! - **Roster reconciliation** — there is no roster endpoint; the roster is
//!   derived from the scores response. A player only leaves the local view
//!   by being absent from the next scores fetch ([`reconcile::reconcile_roster`]).
//! - **Epoch guard** — fetches are never cancelled. A completion from a
//!   previous session is detected by its captured epoch and discarded
//!   instead of overwriting newer state.

pub mod confirm;
pub mod reconcile;
pub mod store;
pub mod types;

pub use confirm::ConfirmPrompt;
pub use reconcile::reconcile_roster;
pub use store::SessionStore;
pub use types::Player;
