//! Error types shared between the library and the CLI.
//!
//! The `MarketError` enum unifies every failure a command can hit, from building
//! a request to resolving a currency, so that the dispatcher in `main` is the only
//! place that turns an error into an exit status.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the CLI.
#[derive(Error, Debug)]
pub enum MarketError {
    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP client or request could not be constructed (bad header value, TLS setup, etc.).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// The request never produced a response: connection refused, DNS failure, timeout.
    #[error("Error sending request to server: {0}")]
    Transport(String),

    /// The response body was not the JSON shape we expect.
    #[error("Bad response from server: {0}")]
    BadResponse(String),

    /// The provider answered with a non-zero `status.error_code`.
    #[error("API error {code}: {message}")]
    Api {
        /// Provider error code.
        code: i64,
        /// Provider error message, or a placeholder when none was sent.
        message: String,
    },

    /// No identifier record matched the requested name, symbol or slug.
    #[error("No matching currency found for '{0}'.")]
    CurrencyNotFound(String),

    /// The identifier resolved, but the listings did not contain that id.
    #[error("No listing found for currency id {0}.")]
    ListingNotFound(u64),

    /// Command-line flags failed validation; carries the usage message.
    #[error("{0}")]
    InvalidArguments(String),
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::BadResponse(err.to_string())
    }
}

impl MarketError {
    /// `true` for the explicit not-found outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MarketError::CurrencyNotFound(_) | MarketError::ListingNotFound(_)
        )
    }
}
