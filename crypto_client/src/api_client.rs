//! HTTP access to the market-data provider.
//!
//! `HttpFetcher` wraps a blocking `reqwest` client configured once from a
//! `ClientConfig`: the API key header and the request timeout are baked into the
//! client, so every call is a plain GET.
use std::fmt;

use crypto_common::endpoint::{API_KEY_ENV, API_KEY_HEADER, Endpoint};
use crypto_common::{ClientConfig, Fetch, MarketError, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

/// `Fetch` implementation backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Builds the client. Fails if the API key is not a valid header value.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        if config.missing_api_key() {
            warn!("{} is not set; the API will reject the request", API_KEY_ENV);
        }

        let client = Client::builder()
            .default_headers(default_headers(&config.api_key)?)
            .timeout(config.timeout)
            .user_agent(concat!("crypto-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketError::RequestBuild(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpFetcher {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

fn default_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut key = HeaderValue::from_str(api_key)
        .map_err(|e| MarketError::RequestBuild(format!("Invalid API key: {}", e)))?;
    key.set_sensitive(true);
    let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
        .map_err(|e| MarketError::RequestBuild(format!("Invalid header name: {}", e)))?;
    headers.insert(name, key);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

impl Fetch for HttpFetcher {
    fn fetch(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        let url = endpoint.url(&self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| MarketError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| MarketError::Transport(e.to_string()))?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());

        Ok(body.to_vec())
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("client", &"<reqwest::blocking::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
