//! Errors raised while talking to the ENT.
use thiserror::Error;

/// Errors returned by [`EntClient`](crate::client::EntClient) and the command dispatcher.
#[derive(Debug, Error)]
pub enum EntError {
    /// The login response did not carry `authenticated=true`.
    #[error("ENT authentication error: the server did not set authenticated=true")]
    Authentication,

    /// Non-success HTTP status or connection failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an unexpected status, redirects included.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Path of the endpoint that returned the body.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid ENT url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl EntError {
    /// Whether this error came from the HTTP layer: connection failure or bad status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
