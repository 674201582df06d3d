//! Current ticker prices, supplied and refreshed by the caller.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::security::StockSymbol;

/// Latest ticker price per symbol. The valuation core only reads this map;
/// whoever drives the engine owns and refreshes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerPrices {
    prices: BTreeMap<StockSymbol, Decimal>,
}

impl TickerPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, symbol: StockSymbol, price: Decimal) {
        self.prices.insert(symbol, price);
    }

    /// `None` when no price has been supplied for `symbol`.
    pub fn price_for(&self, symbol: StockSymbol) -> Option<Decimal> {
        self.prices.get(&symbol).copied()
    }

    /// Prices in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (StockSymbol, Decimal)> + '_ {
        self.prices.iter().map(|(symbol, price)| (*symbol, *price))
    }
}
