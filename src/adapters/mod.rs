//! Concrete adapter implementations for ports.

pub mod console_report_adapter;
pub mod csv_trade_adapter;
pub mod file_config_adapter;
pub mod random_feed_adapter;
