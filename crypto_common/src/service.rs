//! Command-level operations: fetch, decode and resolve.
//!
//! `MarketService` owns a `Fetch` implementation and exposes one method per CLI
//! command. Every outcome is a `Result`; nothing here prints or exits.
use log::info;

use crate::decode::{decode_identifiers, decode_listings};
use crate::endpoint::Endpoint;
use crate::error::MarketError;
use crate::fetch::Fetch;
use crate::model::ListingRecord;
use crate::resolver::{find_symbols, resolve_id, resolve_listing, top_listings};
use crate::result::Result;

/// Number of rows shown by the market listing.
pub const MARKET_TOP_N: usize = 100;

/// Market-data operations over a fetcher.
pub struct MarketService<F> {
    fetcher: F,
}

impl<F: Fetch> MarketService<F> {
    /// Wraps `fetcher`.
    pub fn new(fetcher: F) -> Self {
        MarketService { fetcher }
    }

    /// Resolves `query` (name, symbol or slug) to its provider id.
    pub fn resolve_id(&self, query: &str) -> Result<u64> {
        info!("Retrieving Id...");
        let body = self.fetcher.fetch(Endpoint::IdMap)?;
        let records = decode_identifiers(&body)?;
        resolve_id(&records, query).ok_or_else(|| MarketError::CurrencyNotFound(query.to_string()))
    }

    /// Latest listings, as returned by the provider.
    pub fn listings(&self) -> Result<Vec<ListingRecord>> {
        info!("Retrieving listings...");
        let body = self.fetcher.fetch(Endpoint::ListingsLatest)?;
        decode_listings(&body)
    }

    /// Full listing for one currency given by name, symbol or slug.
    pub fn currency_data(&self, query: &str) -> Result<ListingRecord> {
        let id = self.resolve_id(query)?;
        let listings = self.listings()?;
        resolve_listing(&listings, id)
            .cloned()
            .ok_or(MarketError::ListingNotFound(id))
    }

    /// Top `MARKET_TOP_N` listings in ascending rank order.
    pub fn market_data(&self) -> Result<Vec<ListingRecord>> {
        let listings = self.listings()?;
        Ok(top_listings(&listings, MARKET_TOP_N)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Symbols of the listings named (or slugged) `name`.
    pub fn currency_symbols(&self, name: &str) -> Result<Vec<String>> {
        let listings = self.listings()?;
        let symbols: Vec<String> = find_symbols(&listings, name)
            .into_iter()
            .map(String::from)
            .collect();
        if symbols.is_empty() {
            return Err(MarketError::CurrencyNotFound(name.to_string()));
        }
        Ok(symbols)
    }
}
