//! Dividend yield calculator.

use rust_decimal::Decimal;

use crate::domain::error::ValuationError;
use crate::domain::rounding::{VALUATION_SCALE, round_half_even};
use crate::domain::security::Security;

/// Dividend return per unit of ticker price, rounded half-even to 7 digits.
///
/// Common: `last_dividend / price`. Preferred: `fixed_dividend * par_value / price`.
/// A missing or zero ticker price fails with `InvalidPrice` regardless of class.
pub fn calculate_dividend_yield(
    security: &Security,
    ticker_price: Option<Decimal>,
) -> Result<Decimal, ValuationError> {
    let symbol = security.symbol();
    let price = match ticker_price {
        None => {
            return Err(ValuationError::InvalidPrice {
                symbol,
                reason: "no ticker price supplied".into(),
            });
        }
        Some(price) if price == Decimal::ZERO => {
            return Err(ValuationError::InvalidPrice {
                symbol,
                reason: "ticker price is zero".into(),
            });
        }
        Some(price) => price,
    };

    let value = match security {
        Security::Common { last_dividend, .. } => *last_dividend / price,
        Security::Preferred {
            fixed_dividend,
            par_value,
            ..
        } => *fixed_dividend * Decimal::from(*par_value) / price,
    };
    Ok(round_half_even(value, VALUATION_SCALE))
}
