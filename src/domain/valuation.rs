//! Derived valuation values: per-symbol memoization and the report payload.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::security::StockSymbol;

/// Most recently computed yield and P/E per symbol, overwritten on each
/// recomputation. Purely a memo: every value is re-derivable from the
/// catalogue, ticker prices and ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationCache {
    yields: BTreeMap<StockSymbol, Decimal>,
    pe_ratings: BTreeMap<StockSymbol, Decimal>,
}

impl ValuationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_yield(&mut self, symbol: StockSymbol, value: Decimal) {
        self.yields.insert(symbol, value);
    }

    pub fn yield_for(&self, symbol: StockSymbol) -> Option<Decimal> {
        self.yields.get(&symbol).copied()
    }

    pub fn save_pe_rating(&mut self, symbol: StockSymbol, value: Decimal) {
        self.pe_ratings.insert(symbol, value);
    }

    pub fn pe_rating_for(&self, symbol: StockSymbol) -> Option<Decimal> {
        self.pe_ratings.get(&symbol).copied()
    }

    pub fn reset(&mut self) {
        self.yields.clear();
        self.pe_ratings.clear();
    }
}

/// Everything one valuation run produced, in report-ready form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationSummary {
    pub yields: BTreeMap<StockSymbol, Decimal>,
    pub pe_ratings: BTreeMap<StockSymbol, Decimal>,
    pub window_prices: BTreeMap<StockSymbol, Decimal>,
    pub index: Option<Decimal>,
    /// Formatted per-symbol failures collected while iterating the catalogue.
    pub failures: Vec<String>,
}
