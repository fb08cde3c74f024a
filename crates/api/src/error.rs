//! Error types for game service requests.

/// Errors produced by game service operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status. The message is the
    /// `error` field of the response body when the service provided one,
    /// else a generic per-operation description.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never completed or the body could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
