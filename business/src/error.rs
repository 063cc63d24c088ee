//! Error taxonomy for remote calls.
//!
//! Every fetch in this crate fails into one of these classes. Session
//! resolution swallows them into "anonymous"; widget loaders carry them as
//! inline error state; nothing here ever panics.

use thiserror::Error;

/// Failure of a single remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a usable response (network, CORS, DNS...).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The body was not the shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classifies a completed `ehttp` fetch, keeping only successful
    /// responses.
    pub fn check(result: Result<ehttp::Response, String>) -> Result<ehttp::Response, Self> {
        match result {
            Ok(response) if response.ok => Ok(response),
            Ok(response) => Err(Self::Status(response.status)),
            Err(err) => Err(Self::Transport(err)),
        }
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
