//! Volume-weighted stock price over an optional time window.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::error::ValuationError;
use crate::domain::rounding::{VALUATION_SCALE, round_half_even};
use crate::domain::security::StockSymbol;
use crate::domain::trade::Trade;

/// Open time interval used to filter trades. Either bound may be absent;
/// both bounds are strict, so a trade stamped exactly on a bound is excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TradeWindow {
    /// No bounds: every trade is included.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn after(start: NaiveDateTime) -> Self {
        TradeWindow {
            start: Some(start),
            end: None,
        }
    }

    pub fn before(end: NaiveDateTime) -> Self {
        TradeWindow {
            start: None,
            end: Some(end),
        }
    }

    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        TradeWindow {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(start), None) => timestamp > start,
            (None, Some(end)) => timestamp < end,
            (Some(start), Some(end)) => timestamp > start && timestamp < end,
        }
    }
}

/// Quantity-weighted average price of `symbol`'s trades inside `window`,
/// rounded half-even to 7 digits.
///
/// An empty filtered set is a defined outcome of zero, not an error. A trade
/// inside the window carrying a different symbol fails with `SymbolMismatch`
/// at the point of accumulation.
pub fn calculate_stock_price(
    symbol: StockSymbol,
    trades: &[Trade],
    window: TradeWindow,
) -> Result<Decimal, ValuationError> {
    let mut quantity_sum = Decimal::ZERO;
    let mut quantity_price_sum = Decimal::ZERO;
    let mut included = 0usize;

    for trade in trades {
        if !window.contains(trade.timestamp) {
            continue;
        }
        if trade.symbol != symbol {
            return Err(ValuationError::SymbolMismatch {
                expected: symbol,
                found: trade.symbol,
            });
        }
        let quantity = Decimal::from(trade.quantity);
        quantity_sum += quantity;
        quantity_price_sum += trade.price * quantity;
        included += 1;
    }

    if included == 0 {
        return Ok(round_half_even(Decimal::ZERO, VALUATION_SCALE));
    }
    Ok(round_half_even(
        quantity_price_sum / quantity_sum,
        VALUATION_SCALE,
    ))
}
