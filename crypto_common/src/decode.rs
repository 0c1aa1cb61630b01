//! Response decoding for the identifier map and the listings endpoint.
//!
//! Both endpoints wrap their payload as `{"status": {...}, "data": [...]}`. A
//! non-zero `status.error_code` becomes `MarketError::Api`; malformed JSON or a
//! missing `data` array becomes `MarketError::BadResponse`. Unknown fields are ignored.
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::MarketError;
use crate::model::{ApiStatus, IdentifierRecord, ListingRecord};
use crate::result::Result;

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Envelope<T> {
    #[serde(default)]
    status: Option<ApiStatus>,
    #[serde(default)]
    data: Option<Vec<T>>,
}

fn decode_data<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let envelope: Envelope<T> = serde_json::from_slice(bytes)?;

    if let Some(status) = envelope.status.filter(ApiStatus::is_error) {
        return Err(MarketError::Api {
            code: status.error_code,
            message: status
                .error_message
                .unwrap_or_else(|| String::from("no error message")),
        });
    }

    let data = envelope
        .data
        .ok_or_else(|| MarketError::BadResponse(String::from("response has no data array")))?;
    debug!("Decoded {} records", data.len());
    Ok(data)
}

/// Decode the identifier-map response body.
pub fn decode_identifiers(bytes: &[u8]) -> Result<Vec<IdentifierRecord>> {
    decode_data(bytes)
}

/// Decode the listings-latest response body.
pub fn decode_listings(bytes: &[u8]) -> Result<Vec<ListingRecord>> {
    decode_data(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"{
        "status": {"timestamp": "2024-03-01T10:00:00.000Z", "error_code": 0, "error_message": null},
        "data": [
            {"id": 1, "rank": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin", "is_active": 1},
            {"id": 1027, "rank": 2, "name": "Ethereum", "symbol": "ETH", "slug": "ethereum"}
        ]
    }"#;

    const LISTINGS: &str = r#"{
        "status": {"error_code": 0},
        "data": [{
            "id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin",
            "cmc_rank": 1, "circulating_supply": 19640000.4, "max_supply": 21000000,
            "quote": {"USD": {
                "price": 62345.678, "volume_24h": 3.1e10, "volume_change_24h": -4.25,
                "percent_change_1h": 0.125, "percent_change_24h": -1.5, "percent_change_7d": 12.345,
                "market_cap": 1224456789012.34, "last_updated": "2024-03-01T10:00:00.000Z"
            }}
        }]
    }"#;

    #[test]
    fn identifiers_decode_all_fields() {
        let records = decode_identifiers(MAP.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            IdentifierRecord {
                id: 1027,
                name: "Ethereum".into(),
                symbol: "ETH".into(),
                slug: "ethereum".into(),
            }
        );
    }

    #[test]
    fn listings_keep_presenter_fields() {
        let listings = decode_listings(LISTINGS.as_bytes()).unwrap();
        let btc = &listings[0];
        assert_eq!(btc.rank, 1);
        assert_eq!(btc.symbol, "BTC");
        assert_eq!(btc.circulating_supply, 19640000.4);
        let usd = btc.usd();
        assert_eq!(usd.price, 62345.678);
        assert_eq!(usd.percent_change_7d, 12.345);
        assert_eq!(usd.market_cap, 1224456789012.34);
        assert_eq!(usd.last_updated, "2024-03-01T10:00:00.000Z");
    }

    #[test]
    fn null_numbers_become_zero() {
        let body = r#"{"data": [{"id": 5, "name": "Dust", "symbol": "DST", "slug": "dust",
            "cmc_rank": 9, "circulating_supply": null,
            "quote": {"USD": {"price": 0.5, "percent_change_1h": null, "last_updated": "2024-03-01T10:00:00Z"}}}]}"#;
        let listings = decode_listings(body.as_bytes()).unwrap();
        assert_eq!(listings[0].circulating_supply, 0.0);
        assert_eq!(listings[0].usd().percent_change_1h, 0.0);
        assert_eq!(listings[0].usd().market_cap, 0.0);
    }

    #[test]
    fn malformed_json_is_bad_response() {
        let err = decode_listings(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, MarketError::BadResponse(_)));
    }

    #[test]
    fn missing_data_is_bad_response() {
        let err = decode_identifiers(br#"{"status": {"error_code": 0}}"#).unwrap_err();
        assert!(matches!(err, MarketError::BadResponse(_)));
    }

    #[test]
    fn provider_error_is_surfaced() {
        let body = br#"{"status": {"error_code": 1002, "error_message": "API key missing."}, "data": null}"#;
        match decode_listings(body).unwrap_err() {
            MarketError::Api { code, message } => {
                assert_eq!(code, 1002);
                assert_eq!(message, "API key missing.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
