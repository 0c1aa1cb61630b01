//!
//! Market-data types and lookup logic shared by the CLI.
//!
//! This crate aggregates:
//! - `error` — unified error type `MarketError`.
//! - `result` — handy `Result<T, MarketError>` alias.
//! - `endpoint` — provider URL, auth header and endpoint paths.
//! - `config` — `ClientConfig` handed to the HTTP client.
//! - `model` — identifier and listing records.
//! - `decode` — JSON response decoding.
//! - `resolver` — name/symbol/slug → id → listing lookups.
//! - `fetch` — the `Fetch` trait that abstracts the network.
//! - `service` — `MarketService`, one method per CLI command.
#![warn(missing_docs)]
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod model;
pub mod resolver;
pub mod result;
pub mod service;

pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::MarketError;
pub use fetch::Fetch;
pub use result::Result;
pub use service::MarketService;
