//! Price/earnings rating calculator.

use rust_decimal::Decimal;

use crate::domain::error::ValuationError;
use crate::domain::rounding::{VALUATION_SCALE, round_half_even};
use crate::domain::security::StockSymbol;

/// Ticker price over dividend yield, rounded half-even to 7 digits.
///
/// Only an absent price is rejected here: a zero price already failed the
/// upstream yield computation, so no yield exists to divide by. An absent
/// or zero yield fails with `InvalidYield` (division-by-zero guard).
pub fn calculate_pe_rating(
    symbol: StockSymbol,
    ticker_price: Option<Decimal>,
    dividend_yield: Option<Decimal>,
) -> Result<Decimal, ValuationError> {
    let price = ticker_price.ok_or_else(|| ValuationError::InvalidPrice {
        symbol,
        reason: "no ticker price supplied".into(),
    })?;
    let yield_value = match dividend_yield {
        None => {
            return Err(ValuationError::InvalidYield {
                symbol,
                reason: "no dividend yield available".into(),
            });
        }
        Some(value) if value == Decimal::ZERO => {
            return Err(ValuationError::InvalidYield {
                symbol,
                reason: "dividend yield is zero".into(),
            });
        }
        Some(value) => value,
    };
    Ok(round_half_even(price / yield_value, VALUATION_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_price_fails() {
        let err = calculate_pe_rating(StockSymbol::Ale, None, Some(dec!(1))).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidPrice { .. }));
    }

    #[test]
    fn missing_yield_fails() {
        let err = calculate_pe_rating(StockSymbol::Ale, Some(dec!(20.0)), None).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidYield { .. }));
    }

    #[test]
    fn zero_yield_fails() {
        let err =
            calculate_pe_rating(StockSymbol::Ale, Some(dec!(20.0)), Some(Decimal::ZERO))
                .unwrap_err();
        assert!(matches!(err, ValuationError::InvalidYield { .. }));
    }

    #[test]
    fn zero_price_with_nonzero_yield_is_zero_rating() {
        let result =
            calculate_pe_rating(StockSymbol::Ale, Some(Decimal::ZERO), Some(dec!(10.0))).unwrap();
        assert_eq!(result, dec!(0.0000000));
    }

    #[test]
    fn rating_is_price_over_yield() {
        let result =
            calculate_pe_rating(StockSymbol::Ale, Some(dec!(20.0)), Some(dec!(10.0))).unwrap();
        assert_eq!(result, dec!(2.0000000));
    }

    #[test]
    fn result_is_rounded_half_even_at_seven_digits() {
        // 10 / 3 = 3.3333333...
        let result =
            calculate_pe_rating(StockSymbol::Gin, Some(dec!(10)), Some(dec!(3))).unwrap();
        assert_eq!(result, dec!(3.3333333));
    }
}
