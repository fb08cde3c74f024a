//! Single rolling status line.
//!
//! The stores have no structured error channel: every informational or
//! error outcome replaces the one message a UI shell renders. Last write
//! wins; nothing is queued.

pub mod line;

pub use line::{StatusKind, StatusLine};
