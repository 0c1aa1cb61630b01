//! Command-line arguments for the crypto CLI.
//!
//! Subcommands select the query; global options carry the provider connection
//! settings and fall back to environment variables. See `main` for dispatch.
use std::time::Duration;

use clap::{Parser, Subcommand};
use crypto_common::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crypto_common::endpoint::{API_KEY_ENV, DEFAULT_BASE_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "crypto-cli", version, about = "Cryptocurrency quotes from CoinMarketCap", long_about = None)]
pub struct Cli {
    /// CoinMarketCap Pro API key.
    #[arg(long, global = true, env = API_KEY_ENV, default_value = "", hide_env_values = true, hide_default_value = true)]
    pub api_key: String,

    /// Base URL of the API.
    #[arg(long, global = true, env = "CMARKETCAP_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "CMARKETCAP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current data for one currency.
    GetCurrencyData {
        /// Name of the currency you want to see the current data for.
        #[arg(long, default_value = "")]
        name: String,
        /// Symbol of the currency you want to see data for (ex; BTC, ETH, DOT).
        #[arg(long, default_value = "")]
        symbol: String,
    },
    /// Show the top 100 currencies by market cap.
    GetMarketData,
    /// Print the symbol of a currency given its name.
    GetCurrencySymbol {
        /// Name of the currency you want to get the symbol for.
        #[arg(long, default_value = "")]
        name: String,
    },
}

impl Cli {
    /// Connection settings gathered from flags and environment.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone())
            .with_base_url(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}
