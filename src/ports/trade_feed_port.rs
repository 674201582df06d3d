//! Trade feed port trait.

use rust_decimal::Decimal;

use crate::domain::trade::TradeSide;

/// Source of the variable parts of a simulated trade.
///
/// Injected as a capability so the calculators stay deterministic and the
/// generator is swappable in tests.
pub trait TradeFeedPort {
    fn next_price(&mut self) -> Decimal;
    fn next_quantity(&mut self) -> i64;
    fn next_side(&mut self) -> TradeSide;
    /// Minutes between one trade and the next on the simulated clock.
    fn next_gap_minutes(&mut self) -> i64;
}
