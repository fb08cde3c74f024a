//! HTTP client for the remote card-game service.
//!
//! This crate maps each server operation to one method: no caching, no
//! retry, no failure swallowing. Non-success responses become
//! [`ApiError::RequestFailed`] carrying the service's `error` body field
//! when present, else a generic per-operation message. Callers decide on
//! handling.
//!
//! The stores consume the [`GameService`] trait rather than the concrete
//! [`GameApi`] so tests can script responses without a live service.

pub mod client;
pub mod error;
pub mod service;

pub use client::{DEFAULT_BASE_URL, GameApi};
pub use error::ApiError;
pub use service::{ApiFuture, GameService};
