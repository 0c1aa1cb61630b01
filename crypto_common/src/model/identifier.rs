//! Identifier record from `/v1/cryptocurrency/map`.
use serde::Deserialize;

/// One currency in the provider's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentifierRecord {
    /// Provider id, shared with the listings endpoint.
    pub id: u64,
    /// Display name (e.g., `Bitcoin`).
    pub name: String,
    /// Ticker symbol (e.g., `BTC`).
    pub symbol: String,
    /// URL slug (e.g., `bitcoin`).
    pub slug: String,
}
