//! Turns listing records into display rows and tables.
//!
//! Money and supply use English thousands separators; timestamps are shown in the
//! local time zone.
use chrono::{DateTime, Local, TimeZone};
use crypto_common::model::ListingRecord;
use log::warn;
use std::fmt::Display;

use crate::table::TableWriter;

/// Column headers, in row order.
pub const HEADER: [&str; 10] = [
    "CMC Rank",
    "Name",
    "Symbol",
    "Price",
    "1h %",
    "24h %",
    "7d %",
    "Market Cap",
    "Circulating Supply",
    "Last Updated",
];

/// One display row for `record`, timestamps in the local zone.
pub fn format_row(record: &ListingRecord) -> Vec<String> {
    format_row_in(record, &Local)
}

/// One display row for `record`, timestamps rendered in `tz`.
pub fn format_row_in<Tz>(record: &ListingRecord, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let usd = record.usd();
    vec![
        record.rank.to_string(),
        record.name.clone(),
        record.symbol.clone(),
        format_money(usd.price),
        format_percent(usd.percent_change_1h),
        format_percent(usd.percent_change_24h),
        format_percent(usd.percent_change_7d),
        format_money(usd.market_cap),
        format_supply(record.circulating_supply),
        format_timestamp_in(&usd.last_updated, tz),
    ]
}

/// Single-row table for one currency.
pub fn currency_table(record: &ListingRecord) -> TableWriter {
    let mut table = TableWriter::new(&HEADER);
    table.append(format_row(record));
    table
}

/// Market table with row separators, one row per listing in the order given.
/// The top-100 cutoff is applied by `MarketService::market_data`.
pub fn market_table(listings: &[ListingRecord]) -> TableWriter {
    let mut table = TableWriter::new(&HEADER).with_row_lines(true);
    for listing in listings {
        table.append(format_row(listing));
    }
    table
}

/// `$` + two decimals with thousands separators, e.g. `$1,234.57`.
pub fn format_money(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

/// Two decimals, no grouping.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// Rounded to a whole number with thousands separators.
pub fn format_supply(value: f64) -> String {
    group_thousands(&format!("{:.0}", value))
}

/// Parses an RFC 3339 timestamp and renders it in `tz`. Unparseable input is
/// returned unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
        Err(e) => {
            warn!("Cannot parse timestamp '{}': {}", raw, e);
            raw.to_string()
        }
    }
}

/// Inserts `,` every three digits of the integer part of a formatted number.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}{}", sign, grouped, frac_part)
}
