//! Interactive confirmation seam.
//!
//! Same shape as the lobby's trait; duplicated here so this crate stands
//! alone.

/// Asks the user to confirm a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> bool;
}
