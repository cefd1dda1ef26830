//! Error types for the Freljord client.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for Freljord operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or connection failure. The rate limit registry is left
    /// untouched when this occurs, since no response headers exist.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request was refused locally before any network traffic: the most
    /// recently observed usage for this operation already meets its allowance.
    #[error("quota exhausted for {key}: {used}/{allowed} requests in {window_secs}s window")]
    QuotaExceeded {
        /// Operation key whose quota tripped the gate
        key: String,
        /// Window length, in seconds, of the exhausted limit
        window_secs: u32,
        /// Usage recorded by the most recent response
        used: u32,
        /// Allowance advertised by the most recent response
        allowed: u32,
    },

    /// The server answered with a non-success status. Rate limit state has
    /// already been recorded from the response headers.
    #[error("api returned error status: {status}")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
    },

    /// The response body did not decode into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A request URL could not be constructed
    #[error("invalid url: {0}")]
    Url(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Freljord operations.
pub type Result<T> = std::result::Result<T, Error>;
