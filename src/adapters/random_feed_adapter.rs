//! Random trade feed adapter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::domain::error::ValuationError;
use crate::domain::trade::TradeSide;
use crate::ports::trade_feed_port::TradeFeedPort;

const MIN_GAP_MINUTES: i64 = 1;
const MAX_GAP_MINUTES: i64 = 5;

/// Uniform random feed over configured price and quantity ranges, seeded so
/// a simulation run is reproducible.
///
/// Prices are drawn at two decimal places over `[price_min, price_max)`;
/// quantities and gap minutes over half-open integer ranges.
pub struct RandomFeedAdapter {
    rng: StdRng,
    price_min_cents: i64,
    price_max_cents: i64,
    quantity_min: i64,
    quantity_max: i64,
}

impl RandomFeedAdapter {
    pub fn new(
        seed: u64,
        price_min: Decimal,
        price_max: Decimal,
        quantity_min: i64,
        quantity_max: i64,
    ) -> Result<Self, ValuationError> {
        let price_min_cents = cents(price_min).ok_or_else(|| invalid("price_min"))?;
        let price_max_cents = cents(price_max).ok_or_else(|| invalid("price_max"))?;
        if price_min_cents <= 0 || price_max_cents <= price_min_cents {
            return Err(invalid("price_min/price_max"));
        }
        if quantity_min < 1 || quantity_max <= quantity_min {
            return Err(invalid("quantity_min/quantity_max"));
        }
        Ok(RandomFeedAdapter {
            rng: StdRng::seed_from_u64(seed),
            price_min_cents,
            price_max_cents,
            quantity_min,
            quantity_max,
        })
    }
}

impl TradeFeedPort for RandomFeedAdapter {
    fn next_price(&mut self) -> Decimal {
        let cents = self.rng.gen_range(self.price_min_cents..self.price_max_cents);
        Decimal::new(cents, 2)
    }

    fn next_quantity(&mut self) -> i64 {
        self.rng.gen_range(self.quantity_min..self.quantity_max)
    }

    fn next_side(&mut self) -> TradeSide {
        if self.rng.gen_bool(0.5) {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        }
    }

    fn next_gap_minutes(&mut self) -> i64 {
        self.rng.gen_range(MIN_GAP_MINUTES..MAX_GAP_MINUTES)
    }
}

fn cents(value: Decimal) -> Option<i64> {
    (value * dec!(100)).trunc().to_i64()
}

fn invalid(key: &str) -> ValuationError {
    ValuationError::ConfigInvalid {
        section: "simulation".into(),
        key: key.into(),
        reason: "range must be non-empty and positive".into(),
    }
}
