//! Interactive confirmation seam.

/// Asks the user to confirm a destructive action.
///
/// The UI shell implements this (dialog box, terminal prompt); tests answer
/// from a canned value. Destructive store operations never proceed without
/// a `true` answer.
pub trait ConfirmPrompt {
    fn confirm(&self, prompt: &str) -> bool;
}
