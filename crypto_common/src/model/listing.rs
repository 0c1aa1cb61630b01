//! Listing records from `/v1/cryptocurrency/listings/latest`.
use serde::Deserialize;

use super::nullable_f64;

/// USD market quote nested in a listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quote {
    /// Last price in USD.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub price: f64,
    /// Traded volume over 24 hours.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub volume_24h: f64,
    /// Change in 24h volume, percent.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub volume_change_24h: f64,
    /// Price change over 1 hour, percent.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub percent_change_1h: f64,
    /// Price change over 24 hours, percent.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub percent_change_24h: f64,
    /// Price change over 7 days, percent.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub percent_change_7d: f64,
    /// Market capitalisation in USD.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub market_cap: f64,
    /// RFC 3339 timestamp of the last update.
    #[serde(default)]
    pub last_updated: String,
}

/// Quotes keyed by fiat currency; only USD is requested.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteMap {
    /// USD quote.
    #[serde(rename = "USD", default)]
    pub usd: Quote,
}

/// Market snapshot for one currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingRecord {
    /// Provider id, matches `IdentifierRecord::id`.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// URL slug.
    pub slug: String,
    /// Coins in circulation.
    #[serde(default, deserialize_with = "nullable_f64")]
    pub circulating_supply: f64,
    /// Rank by market capitalisation, starting at 1.
    #[serde(rename = "cmc_rank", default)]
    pub rank: u32,
    /// Quotes by fiat currency.
    #[serde(default)]
    pub quote: QuoteMap,
}

impl ListingRecord {
    /// The USD quote.
    pub fn usd(&self) -> &Quote {
        &self.quote.usd
    }
}
