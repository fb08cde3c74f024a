//! Game list store.
//!
//! Holds the set of known games and the currently selected game id, and
//! synchronizes both with the remote service: refresh, create-and-select,
//! confirmed close, plus pure selection. Selecting a different id is the
//! signal for the caller to rebuild the active-game session from scratch.
//!
//! Every operation failure surfaces only as a status-line replacement;
//! there is no structured error channel and no retry.

pub mod confirm;
pub mod store;

pub use confirm::ConfirmPrompt;
pub use store::LobbyStore;
