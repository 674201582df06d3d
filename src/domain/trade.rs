//! Trade records and draft validation.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::error::TradeRejection;
use crate::domain::security::StockSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn parse(s: &str) -> Option<TradeSide> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Some(TradeSide::Buy),
            "SELL" => Some(TradeSide::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => f.write_str("BUY"),
            TradeSide::Sell => f.write_str("SELL"),
        }
    }
}

/// A validated trade. Immutable once accepted; only [`TradeDraft::validate`]
/// constructs one, so every stored trade has a positive quantity and price.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub symbol: StockSymbol,
    pub timestamp: NaiveDateTime,
    pub quantity: i64,
    pub price: Decimal,
    pub side: TradeSide,
}

/// A trade as it arrives from a feed, before validation. Every field may be
/// absent; feeds map unparseable input to `None` so the ledger reports the
/// rejection through one taxonomy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeDraft {
    pub symbol: Option<StockSymbol>,
    pub timestamp: Option<NaiveDateTime>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
    pub side: Option<TradeSide>,
}

impl TradeDraft {
    /// Checks run in priority order; the first violated constraint wins.
    pub fn validate(self) -> Result<Trade, TradeRejection> {
        let symbol = self.symbol.ok_or(TradeRejection::MissingSymbol)?;
        let price = match self.price {
            Some(price) if price > Decimal::ZERO => price,
            _ => return Err(TradeRejection::NonPositivePrice),
        };
        let quantity = match self.quantity {
            Some(quantity) if quantity > 0 => quantity,
            _ => return Err(TradeRejection::NonPositiveQuantity),
        };
        let timestamp = self.timestamp.ok_or(TradeRejection::MissingTimestamp)?;
        let side = self.side.ok_or(TradeRejection::MissingSide)?;
        Ok(Trade {
            symbol,
            timestamp,
            quantity,
            price,
            side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 10, 31)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn full_draft() -> TradeDraft {
        TradeDraft {
            symbol: Some(StockSymbol::Ale),
            timestamp: Some(ts()),
            quantity: Some(5),
            price: Some(dec!(10.0)),
            side: Some(TradeSide::Buy),
        }
    }

    #[test]
    fn side_parse() {
        assert_eq!(TradeSide::parse("BUY"), Some(TradeSide::Buy));
        assert_eq!(TradeSide::parse(" sell "), Some(TradeSide::Sell));
        assert_eq!(TradeSide::parse("HOLD"), None);
    }

    #[test]
    fn valid_draft_becomes_trade() {
        let trade = full_draft().validate().unwrap();
        assert_eq!(trade.symbol, StockSymbol::Ale);
        assert_eq!(trade.quantity, 5);
        assert_eq!(trade.price, dec!(10.0));
        assert_eq!(trade.side, TradeSide::Buy);
    }

    #[test]
    fn missing_symbol_rejected() {
        let draft = TradeDraft {
            symbol: None,
            ..full_draft()
        };
        assert_eq!(draft.validate(), Err(TradeRejection::MissingSymbol));
    }

    #[test]
    fn missing_price_rejected() {
        let draft = TradeDraft {
            price: None,
            ..full_draft()
        };
        assert_eq!(draft.validate(), Err(TradeRejection::NonPositivePrice));
    }

    #[test]
    fn zero_and_negative_price_rejected() {
        for price in [Decimal::ZERO, dec!(-10.0)] {
            let draft = TradeDraft {
                price: Some(price),
                ..full_draft()
            };
            assert_eq!(draft.validate(), Err(TradeRejection::NonPositivePrice));
        }
    }

    #[test]
    fn zero_and_negative_quantity_rejected() {
        for quantity in [0, -10] {
            let draft = TradeDraft {
                quantity: Some(quantity),
                ..full_draft()
            };
            assert_eq!(draft.validate(), Err(TradeRejection::NonPositiveQuantity));
        }
    }

    #[test]
    fn missing_timestamp_rejected() {
        let draft = TradeDraft {
            timestamp: None,
            ..full_draft()
        };
        assert_eq!(draft.validate(), Err(TradeRejection::MissingTimestamp));
    }

    #[test]
    fn missing_side_rejected() {
        let draft = TradeDraft {
            side: None,
            ..full_draft()
        };
        assert_eq!(draft.validate(), Err(TradeRejection::MissingSide));
    }

    #[test]
    fn first_violation_wins() {
        // everything wrong: the symbol check fires first
        assert_eq!(
            TradeDraft::default().validate(),
            Err(TradeRejection::MissingSymbol)
        );

        // symbol present, price and quantity both invalid: price fires
        let draft = TradeDraft {
            symbol: Some(StockSymbol::Tea),
            timestamp: None,
            quantity: Some(0),
            price: Some(dec!(-1)),
            side: None,
        };
        assert_eq!(draft.validate(), Err(TradeRejection::NonPositivePrice));

        // price fine, quantity invalid and timestamp missing: quantity fires
        let draft = TradeDraft {
            symbol: Some(StockSymbol::Tea),
            timestamp: None,
            quantity: Some(0),
            price: Some(dec!(1)),
            side: None,
        };
        assert_eq!(draft.validate(), Err(TradeRejection::NonPositiveQuantity));

        // only timestamp and side missing: timestamp fires
        let draft = TradeDraft {
            symbol: Some(StockSymbol::Tea),
            timestamp: None,
            quantity: Some(1),
            price: Some(dec!(1)),
            side: None,
        };
        assert_eq!(draft.validate(), Err(TradeRejection::MissingTimestamp));
    }
}
