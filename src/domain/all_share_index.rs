//! All-share index: geometric mean of every recorded trade price.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, MathematicalOps};

use crate::domain::error::ValuationError;
use crate::domain::rounding::{INDEX_SCALE, round_half_even};
use crate::domain::security::StockSymbol;
use crate::domain::trade::Trade;

/// Geometric mean of all trade prices across all symbols, rounded half-even
/// to 2 digits. Volume and symbol are ignored; every price counts once.
///
/// The mean is accumulated as a sum of natural logs: the raw price product
/// would overflow the decimal mantissa at realistic trade counts, while the
/// mean of logs never exceeds the log of the largest recorded price.
pub fn calculate_all_share_index(
    trades_by_symbol: &BTreeMap<StockSymbol, Vec<Trade>>,
) -> Result<Decimal, ValuationError> {
    let mut log_sum = Decimal::ZERO;
    let mut price_count: i64 = 0;

    for trades in trades_by_symbol.values() {
        for trade in trades {
            // ln is defined: the ledger only stores strictly positive prices
            log_sum += trade.price.ln();
            price_count += 1;
        }
    }

    if price_count == 0 {
        return Err(ValuationError::NoData);
    }

    let mean_log = log_sum / Decimal::from(price_count);
    Ok(round_half_even(mean_log.exp(), INDEX_SCALE))
}
