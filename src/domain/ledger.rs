//! Trade ledger: validates, stores and serves trade records.

use std::collections::BTreeMap;

use crate::domain::error::ValuationError;
use crate::domain::security::StockSymbol;
use crate::domain::trade::{Trade, TradeDraft};

/// In-memory trade store, keyed by symbol, insertion-ordered per symbol.
///
/// The ledger is the sole owner and mutator of trade state; calculators get
/// immutable views. The reference model is single-threaded. Callers sharing
/// the ledger across producers must guard the whole struct with one lock so
/// a reader never observes a partially appended trade and `reset` never
/// races a `record`.
#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    trades: BTreeMap<StockSymbol, Vec<Trade>>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` and append the resulting trade to its symbol's
    /// sequence. The first violated constraint is the one reported; a
    /// rejected draft leaves the ledger untouched.
    pub fn record(&mut self, draft: TradeDraft) -> Result<(), ValuationError> {
        let trade = draft.validate()?;
        self.trades.entry(trade.symbol).or_default().push(trade);
        Ok(())
    }

    /// Trades recorded for `symbol`, oldest first. Empty if none.
    pub fn trades_for(&self, symbol: StockSymbol) -> &[Trade] {
        self.trades.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// View of every symbol's trades, in symbol order.
    pub fn all_trades(&self) -> &BTreeMap<StockSymbol, Vec<Trade>> {
        &self.trades
    }

    /// Total number of recorded trades across all symbols.
    pub fn trade_count(&self) -> usize {
        self.trades.values().map(Vec::len).sum()
    }

    /// Drop every recorded trade for every symbol. Idempotent.
    pub fn reset(&mut self) {
        self.trades.clear();
    }
}
