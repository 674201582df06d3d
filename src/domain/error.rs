//! Domain error types.

use crate::domain::security::StockSymbol;

/// Reason the ledger rejected a trade draft.
///
/// Constraints are checked in a fixed priority order (symbol, price,
/// quantity, timestamp, side) and the first violation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TradeRejection {
    #[error("stock symbol must be specified")]
    MissingSymbol,

    #[error("trade price must be a valid value greater than zero")]
    NonPositivePrice,

    #[error("trade quantity must be a valid value greater than zero")]
    NonPositiveQuantity,

    #[error("trade timestamp must be specified")]
    MissingTimestamp,

    #[error("trade side must be BUY or SELL")]
    MissingSide,
}

/// Top-level error type for stockval.
///
/// Every kind is a local, non-retriable failure surfaced synchronously to
/// the immediate caller. A failed calculation for one symbol never stops
/// calculations for the others.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error("invalid ticker price for {symbol}: {reason}")]
    InvalidPrice { symbol: StockSymbol, reason: String },

    #[error("security {symbol} is missing attribute {attribute}")]
    MissingAttribute {
        symbol: StockSymbol,
        attribute: &'static str,
    },

    #[error("invalid dividend yield for {symbol}: {reason}")]
    InvalidYield { symbol: StockSymbol, reason: String },

    /// Guard for states the closed `Security` enumeration makes
    /// unrepresentable; no code path constructs this.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("trade rejected: {0}")]
    InvalidTrade(#[from] TradeRejection),

    #[error("trade symbol {found} does not match requested symbol {expected}")]
    SymbolMismatch {
        expected: StockSymbol,
        found: StockSymbol,
    },

    #[error("unknown stock symbol: {symbol}")]
    NotFound { symbol: String },

    #[error("no trade prices have been recorded")]
    NoData,

    #[error("trade feed error: {reason}")]
    Feed { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ValuationError> for std::process::ExitCode {
    fn from(err: &ValuationError) -> Self {
        let code: u8 = match err {
            ValuationError::Io(_) => 1,
            ValuationError::ConfigParse { .. } | ValuationError::ConfigInvalid { .. } => 2,
            ValuationError::InvalidTrade(_) | ValuationError::Feed { .. } => 3,
            ValuationError::InvalidPrice { .. }
            | ValuationError::MissingAttribute { .. }
            | ValuationError::InvalidYield { .. }
            | ValuationError::InvalidState { .. }
            | ValuationError::SymbolMismatch { .. } => 4,
            ValuationError::NotFound { .. } | ValuationError::NoData => 5,
        };
        std::process::ExitCode::from(code)
    }
}
