//! Currency resolution over decoded provider data.
//!
//! Resolution is always two-step: name/symbol/slug → id via the identifier map, then
//! id → listing. The listings endpoint cannot filter by name server-side.
use crate::model::{IdentifierRecord, ListingRecord};

/// Returns the id of the first record whose name, slug or symbol equals `query`,
/// ignoring case.
pub fn resolve_id(records: &[IdentifierRecord], query: &str) -> Option<u64> {
    let query = query.to_lowercase();
    records
        .iter()
        .find(|r| {
            r.name.to_lowercase() == query
                || r.slug.to_lowercase() == query
                || r.symbol.to_lowercase() == query
        })
        .map(|r| r.id)
}

/// Returns the first listing carrying `id`.
pub fn resolve_listing(listings: &[ListingRecord], id: u64) -> Option<&ListingRecord> {
    listings.iter().find(|l| l.id == id)
}

/// Symbols of every listing whose name or slug equals `name`, ignoring case,
/// in listing order.
pub fn find_symbols<'a>(listings: &'a [ListingRecord], name: &str) -> Vec<&'a str> {
    let name = name.to_lowercase();
    listings
        .iter()
        .filter(|l| l.name.to_lowercase() == name || l.slug.to_lowercase() == name)
        .map(|l| l.symbol.as_str())
        .collect()
}

/// Listings ranked `1..=limit`, in ascending rank order.
pub fn top_listings(listings: &[ListingRecord], limit: usize) -> Vec<&ListingRecord> {
    let mut top: Vec<&ListingRecord> = listings
        .iter()
        .filter(|l| l.rank >= 1 && (l.rank as usize) <= limit)
        .collect();
    top.sort_by_key(|l| l.rank);
    top.truncate(limit);
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listing::QuoteMap;

    fn id_record(id: u64, name: &str, symbol: &str, slug: &str) -> IdentifierRecord {
        IdentifierRecord {
            id,
            name: name.into(),
            symbol: symbol.into(),
            slug: slug.into(),
        }
    }

    fn listing(id: u64, rank: u32, name: &str, symbol: &str) -> ListingRecord {
        ListingRecord {
            id,
            name: name.into(),
            symbol: symbol.into(),
            slug: name.to_lowercase().replace(' ', "-"),
            circulating_supply: 1_000.0,
            rank,
            quote: QuoteMap::default(),
        }
    }

    #[test]
    fn resolve_id_matches_name_case_insensitively() {
        // Symbols deliberately differ from names so "BTC" only hits when the symbol field matches.
        let records = vec![
            id_record(1, "bitcoin", "bitcoin", "bitcoin"),
            id_record(1027, "ethereum", "ethereum", "ethereum"),
        ];
        assert_eq!(resolve_id(&records, "BTC"), None);
        assert_eq!(resolve_id(&records, "bitcoin"), Some(1));
        assert_eq!(resolve_id(&records, "Bitcoin"), Some(1));
        assert_eq!(resolve_id(&records, "ETHEREUM"), Some(1027));
    }

    #[test]
    fn resolve_id_checks_symbol_and_slug() {
        let records = vec![
            id_record(1, "Bitcoin", "BTC", "bitcoin"),
            id_record(6636, "Polkadot", "DOT", "polkadot-new"),
        ];
        assert_eq!(resolve_id(&records, "btc"), Some(1));
        assert_eq!(resolve_id(&records, "Polkadot-New"), Some(6636));
        assert_eq!(resolve_id(&records, "doge"), None);
        assert_eq!(resolve_id(&[], "btc"), None);
    }

    #[test]
    fn resolve_id_takes_first_match() {
        let records = vec![
            id_record(10, "Alpha", "ABC", "alpha"),
            id_record(20, "Beta", "ABC", "beta"),
        ];
        assert_eq!(resolve_id(&records, "abc"), Some(10));
    }

    #[test]
    fn resolve_listing_is_pure() {
        let listings = vec![listing(1, 1, "Bitcoin", "BTC"), listing(1027, 2, "Ethereum", "ETH")];
        let first = resolve_listing(&listings, 1027);
        let second = resolve_listing(&listings, 1027);
        assert_eq!(first, second);
        assert_eq!(first.map(|l| l.symbol.as_str()), Some("ETH"));
        assert!(resolve_listing(&listings, 0).is_none());
    }

    #[test]
    fn find_symbols_by_name_or_slug() {
        let listings = vec![
            listing(1, 1, "Bitcoin", "BTC"),
            listing(2, 2, "Wrapped Bitcoin", "WBTC"),
        ];
        assert_eq!(find_symbols(&listings, "BITCOIN"), vec!["BTC"]);
        assert_eq!(find_symbols(&listings, "wrapped-bitcoin"), vec!["WBTC"]);
        assert!(find_symbols(&listings, "btc").is_empty());
    }

    #[test]
    fn top_listings_caps_at_limit_in_rank_order() {
        let listings: Vec<ListingRecord> = (1..=150)
            .rev()
            .map(|rank| listing(rank as u64, rank, &format!("Coin {rank}"), "C"))
            .collect();
        let top = top_listings(&listings, 100);
        assert_eq!(top.len(), 100);
        let ranks: Vec<u32> = top.iter().map(|l| l.rank).collect();
        assert_eq!(ranks, (1..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn top_listings_keeps_short_input() {
        let listings: Vec<ListingRecord> =
            (1..=7).map(|rank| listing(rank as u64, rank, "Coin", "C")).collect();
        assert_eq!(top_listings(&listings, 100).len(), 7);
    }
}
