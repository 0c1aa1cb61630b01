//! Client configuration passed into the API client at construction.
use std::fmt;
use std::time::Duration;

use crate::endpoint::DEFAULT_BASE_URL;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the market-data provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent in the authentication header. May be empty.
    pub api_key: String,
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for the default provider URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `true` when no API key was supplied.
    pub fn missing_api_key(&self) -> bool {
        self.api_key.trim().is_empty()
    }
}

// Keep the key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
