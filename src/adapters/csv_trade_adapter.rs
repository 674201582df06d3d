//! CSV trade replay adapter.
//!
//! Reads trade drafts from `symbol,timestamp,quantity,price,side` rows.
//! Unparseable fields become `None` so the ledger's own validation reports
//! the rejection, and the remaining rows still load.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::error::ValuationError;
use crate::domain::security::StockSymbol;
use crate::domain::trade::{TradeDraft, TradeSide};

/// Timestamp format shared by the CSV feed and the config file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn load_trade_drafts<P: AsRef<Path>>(path: P) -> Result<Vec<TradeDraft>, ValuationError> {
    let content = fs::read_to_string(path)?;
    parse_trade_drafts(&content)
}

pub fn parse_trade_drafts(content: &str) -> Result<Vec<TradeDraft>, ValuationError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut drafts = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| ValuationError::Feed {
            reason: format!("CSV parse error: {}", e),
        })?;

        drafts.push(TradeDraft {
            symbol: record
                .get(0)
                .and_then(|raw| StockSymbol::from_str(raw).ok()),
            timestamp: record
                .get(1)
                .and_then(|raw| NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()),
            quantity: record.get(2).and_then(|raw| raw.trim().parse::<i64>().ok()),
            price: record.get(3).and_then(|raw| Decimal::from_str(raw.trim()).ok()),
            side: record.get(4).and_then(|raw| TradeSide::parse(raw)),
        });
    }

    Ok(drafts)
}
