//! Decimal rounding policy.
//!
//! Every final valuation result passes through [`round_half_even`].
//! Intermediate sums stay in `Decimal` so trade-count-sized reductions
//! cannot drift the way floating point would.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits for dividend yield, P/E rating and windowed price.
pub const VALUATION_SCALE: u32 = 7;

/// Fractional digits for the all-share index.
pub const INDEX_SCALE: u32 = 2;

/// Round `value` to `scale` fractional digits, ties to the nearest even digit.
pub fn round_half_even(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
}
