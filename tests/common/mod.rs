#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use stockval::domain::security::StockSymbol;
use stockval::domain::trade::{TradeDraft, TradeSide};
use stockval::ports::trade_feed_port::TradeFeedPort;

/// Timestamp on the reference session day.
pub fn ts(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2016, 10, 31)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn draft(
    symbol: StockSymbol,
    timestamp: NaiveDateTime,
    quantity: i64,
    price: Decimal,
) -> TradeDraft {
    TradeDraft {
        symbol: Some(symbol),
        timestamp: Some(timestamp),
        quantity: Some(quantity),
        price: Some(price),
        side: Some(TradeSide::Buy),
    }
}

/// Feed that replays scripted values, cycling when it runs out.
pub struct ScriptedFeed {
    pub prices: Vec<Decimal>,
    pub quantities: Vec<i64>,
    pub gaps: Vec<i64>,
    price_at: usize,
    quantity_at: usize,
    gap_at: usize,
}

impl ScriptedFeed {
    pub fn new(prices: Vec<Decimal>, quantities: Vec<i64>, gaps: Vec<i64>) -> Self {
        ScriptedFeed {
            prices,
            quantities,
            gaps,
            price_at: 0,
            quantity_at: 0,
            gap_at: 0,
        }
    }
}

impl TradeFeedPort for ScriptedFeed {
    fn next_price(&mut self) -> Decimal {
        let price = self.prices[self.price_at % self.prices.len()];
        self.price_at += 1;
        price
    }

    fn next_quantity(&mut self) -> i64 {
        let quantity = self.quantities[self.quantity_at % self.quantities.len()];
        self.quantity_at += 1;
        quantity
    }

    fn next_side(&mut self) -> TradeSide {
        TradeSide::Buy
    }

    fn next_gap_minutes(&mut self) -> i64 {
        let gap = self.gaps[self.gap_at % self.gaps.len()];
        self.gap_at += 1;
        gap
    }
}
