//! Provider endpoints and request constants.

use strum_macros::{Display, EnumIter};

/// Default base URL of the market-data provider.
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CMARKETCAP_API_KEY";

/// The two endpoints the CLI talks to. `Display` yields the request path.
#[derive(Debug, Clone, Copy, Display, EnumIter, Hash, Eq, PartialEq)]
pub enum Endpoint {
    /// Identifier map: every currency's id, name, symbol and slug.
    #[strum(serialize = "/v1/cryptocurrency/map")]
    IdMap,
    /// Latest listings with USD quotes, ordered by rank.
    #[strum(serialize = "/v1/cryptocurrency/listings/latest")]
    ListingsLatest,
}

impl Endpoint {
    /// Join the endpoint path onto `base_url`, tolerating a trailing slash.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn paths_are_rooted() {
        for endpoint in Endpoint::iter() {
            assert!(endpoint.to_string().starts_with("/v1/cryptocurrency/"));
        }
    }

    #[test]
    fn url_strips_trailing_slash() {
        assert_eq!(
            Endpoint::IdMap.url("http://localhost:8080/"),
            "http://localhost:8080/v1/cryptocurrency/map"
        );
        assert_eq!(
            Endpoint::ListingsLatest.url(DEFAULT_BASE_URL),
            "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest"
        );
    }
}
