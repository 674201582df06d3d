//! CLI definition and dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Duration, NaiveDateTime};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::adapters::console_report_adapter::ConsoleReportAdapter;
use crate::adapters::csv_trade_adapter::{self, TIMESTAMP_FORMAT};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::random_feed_adapter::RandomFeedAdapter;
use crate::domain::all_share_index::calculate_all_share_index;
use crate::domain::dividend_yield::calculate_dividend_yield;
use crate::domain::error::ValuationError;
use crate::domain::ledger::TradeLedger;
use crate::domain::pe_rating::calculate_pe_rating;
use crate::domain::security::{Catalogue, Security, StockSymbol};
use crate::domain::stock_price::{TradeWindow, calculate_stock_price};
use crate::domain::ticker::TickerPrices;
use crate::domain::trade::TradeDraft;
use crate::domain::valuation::{ValuationCache, ValuationSummary};
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::trade_feed_port::TradeFeedPort;

#[derive(Parser, Debug)]
#[command(name = "stockval", about = "Stock valuation engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a full valuation over the catalogue
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Trades to simulate per symbol
        #[arg(long)]
        trades: Option<i64>,
        /// Seed for the random trade feed
        #[arg(long)]
        seed: Option<u64>,
        /// Width of the stock-price window in minutes
        #[arg(long)]
        window_minutes: Option<i64>,
        /// Replay trades from a CSV file instead of simulating them
        #[arg(long)]
        trades_csv: Option<PathBuf>,
    },
    /// Print the security catalogue
    Catalogue {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run {
            config,
            trades,
            seed,
            window_minutes,
            trades_csv,
        } => run_valuation_command(
            config.as_ref(),
            trades,
            seed,
            window_minutes,
            trades_csv.as_ref(),
        ),
        Command::Catalogue { config } => run_catalogue(config.as_ref()),
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::empty());
    };
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ValuationError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub const DEFAULT_SESSION_START: &str = "2016-10-31T10:00:00";

/// Simulation parameters, resolved from `[simulation]` config with built-in
/// defaults so the binary runs without any config file.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub session_start: NaiveDateTime,
    pub trades_per_symbol: i64,
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub quantity_min: i64,
    pub quantity_max: i64,
    /// Minutes after session start at which the stock-price window opens.
    pub window_offset_minutes: i64,
    pub window_minutes: i64,
    pub seed: u64,
}

impl SimulationConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, ValuationError> {
        let start_raw = config
            .get_string("simulation", "session_start")
            .unwrap_or_else(|| DEFAULT_SESSION_START.to_string());
        let session_start = NaiveDateTime::parse_from_str(start_raw.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| ValuationError::ConfigInvalid {
                section: "simulation".into(),
                key: "session_start".into(),
                reason: e.to_string(),
            })?;

        let sim = SimulationConfig {
            session_start,
            trades_per_symbol: config.get_int("simulation", "trades_per_symbol", 50),
            price_min: config.get_decimal("simulation", "price_min", dec!(1.00)),
            price_max: config.get_decimal("simulation", "price_max", dec!(10.00)),
            quantity_min: config.get_int("simulation", "quantity_min", 1),
            quantity_max: config.get_int("simulation", "quantity_max", 100),
            window_offset_minutes: config.get_int("simulation", "window_offset_minutes", 60),
            window_minutes: config.get_int("simulation", "window_minutes", 15),
            seed: config.get_int("simulation", "seed", 0).max(0) as u64,
        };
        sim.validate()?;
        Ok(sim)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        if self.trades_per_symbol < 1 {
            return Err(invalid_sim("trades_per_symbol", "must be at least 1"));
        }
        if self.window_minutes < 1 {
            return Err(invalid_sim("window_minutes", "must be at least 1"));
        }
        if self.window_offset_minutes < 0 {
            return Err(invalid_sim("window_offset_minutes", "must not be negative"));
        }
        Ok(())
    }

    /// The stock-price query window: an open interval starting
    /// `window_offset_minutes` after session start.
    pub fn price_window(&self) -> TradeWindow {
        let start = self.session_start + Duration::minutes(self.window_offset_minutes);
        TradeWindow::between(start, start + Duration::minutes(self.window_minutes))
    }
}

fn invalid_sim(key: &str, reason: &str) -> ValuationError {
    ValuationError::ConfigInvalid {
        section: "simulation".into(),
        key: key.into(),
        reason: reason.into(),
    }
}

/// Record `trades_per_symbol` simulated trades for every symbol, advancing a
/// per-symbol clock by the feed's gap before each trade.
pub fn record_simulated_trades(
    ledger: &mut TradeLedger,
    feed: &mut dyn TradeFeedPort,
    sim: &SimulationConfig,
) -> Result<(), ValuationError> {
    for symbol in StockSymbol::ALL {
        let mut clock = sim.session_start;
        for _ in 0..sim.trades_per_symbol {
            clock += Duration::minutes(feed.next_gap_minutes());
            let draft = TradeDraft {
                symbol: Some(symbol),
                timestamp: Some(clock),
                quantity: Some(feed.next_quantity()),
                price: Some(feed.next_price()),
                side: Some(feed.next_side()),
            };
            ledger.record(draft)?;
        }
    }
    Ok(())
}

/// Record each draft, collecting rejections instead of aborting the batch.
/// Returns the number of accepted trades and the rejection messages.
pub fn replay_trades(ledger: &mut TradeLedger, drafts: Vec<TradeDraft>) -> (usize, Vec<String>) {
    let mut recorded = 0;
    let mut rejected = Vec::new();
    for draft in drafts {
        match ledger.record(draft) {
            Ok(()) => recorded += 1,
            Err(e) => rejected.push(e.to_string()),
        }
    }
    (recorded, rejected)
}

/// Execute the valuation pipeline over the whole catalogue, collecting
/// per-symbol failures instead of aborting on them.
pub fn run_valuation(
    catalogue: &Catalogue,
    prices: &TickerPrices,
    ledger: &TradeLedger,
    window: TradeWindow,
) -> ValuationSummary {
    let mut cache = ValuationCache::new();
    let mut summary = ValuationSummary::default();

    for security in catalogue.iter() {
        let symbol = security.symbol();
        match calculate_dividend_yield(security, prices.price_for(symbol)) {
            Ok(value) => {
                cache.save_yield(symbol, value);
                summary.yields.insert(symbol, value);
            }
            Err(e) => summary.failures.push(e.to_string()),
        }
    }

    for security in catalogue.iter() {
        let symbol = security.symbol();
        match calculate_pe_rating(symbol, prices.price_for(symbol), cache.yield_for(symbol)) {
            Ok(value) => {
                cache.save_pe_rating(symbol, value);
                summary.pe_ratings.insert(symbol, value);
            }
            Err(e) => summary.failures.push(e.to_string()),
        }
    }

    for (symbol, trades) in ledger.all_trades() {
        match calculate_stock_price(*symbol, trades, window) {
            Ok(value) => {
                summary.window_prices.insert(*symbol, value);
            }
            Err(e) => summary.failures.push(e.to_string()),
        }
    }

    match calculate_all_share_index(ledger.all_trades()) {
        Ok(value) => summary.index = Some(value),
        Err(e) => summary.failures.push(e.to_string()),
    }

    summary
}

fn run_valuation_command(
    config_path: Option<&PathBuf>,
    trades: Option<i64>,
    seed: Option<u64>,
    window_minutes: Option<i64>,
    trades_csv: Option<&PathBuf>,
) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let mut sim = match SimulationConfig::from_config(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if let Some(n) = trades {
        sim.trades_per_symbol = n;
    }
    if let Some(s) = seed {
        sim.seed = s;
    }
    if let Some(w) = window_minutes {
        sim.window_minutes = w;
    }
    if let Err(e) = sim.validate() {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let catalogue = match Catalogue::from_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut feed = match RandomFeedAdapter::new(
        sim.seed,
        sim.price_min,
        sim.price_max,
        sim.quantity_min,
        sim.quantity_max,
    ) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut prices = TickerPrices::new();
    for symbol in StockSymbol::ALL {
        prices.set(symbol, feed.next_price());
    }

    let mut ledger = TradeLedger::new();
    if let Some(csv_path) = trades_csv {
        eprintln!("Replaying trades from {}", csv_path.display());
        let drafts = match csv_trade_adapter::load_trade_drafts(csv_path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        let (recorded, rejected) = replay_trades(&mut ledger, drafts);
        for reason in &rejected {
            eprintln!("warning: {reason}");
        }
        eprintln!("Recorded {recorded} trades ({} rejected)", rejected.len());
    } else {
        eprintln!(
            "Simulating {} trades per symbol from {}",
            sim.trades_per_symbol, sim.session_start
        );
        if let Err(e) = record_simulated_trades(&mut ledger, &mut feed, &sim) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Recorded {} trades", ledger.trade_count());
    }

    let summary = run_valuation(&catalogue, &prices, &ledger, sim.price_window());

    let mut report = ConsoleReportAdapter::stdout();
    if let Err(e) = report.write(&summary) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    ExitCode::SUCCESS
}

fn run_catalogue(config_path: Option<&PathBuf>) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalogue = match Catalogue::from_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!(
        "{:<8}{:<12}{:>15}{:>16}{:>11}",
        "SYMBOL", "CLASS", "LAST DIVIDEND", "FIXED DIVIDEND", "PAR VALUE"
    );
    for security in catalogue.iter() {
        match security {
            Security::Common {
                symbol,
                last_dividend,
            } => println!(
                "{symbol:<8}{:<12}{last_dividend:>15}{:>16}{:>11}",
                "COMMON", "-", "-"
            ),
            Security::Preferred {
                symbol,
                fixed_dividend,
                par_value,
            } => println!(
                "{symbol:<8}{:<12}{:>15}{fixed_dividend:>16}{par_value:>11}",
                "PREFERRED", "-"
            ),
        }
    }
    ExitCode::SUCCESS
}
