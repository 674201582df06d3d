//! Console report adapter.

use std::io::Write;

use crate::domain::error::ValuationError;
use crate::domain::valuation::ValuationSummary;
use crate::ports::report_port::ReportPort;

/// Writes a valuation summary as a sectioned text report.
pub struct ConsoleReportAdapter<W: Write> {
    out: W,
}

impl ConsoleReportAdapter<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReportAdapter {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleReportAdapter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReportAdapter { out }
    }
}

impl<W: Write> ReportPort for ConsoleReportAdapter<W> {
    fn write(&mut self, summary: &ValuationSummary) -> Result<(), ValuationError> {
        writeln!(self.out, "DIVIDEND YIELD")?;
        for (symbol, value) in &summary.yields {
            writeln!(self.out, "  {symbol}: {value:.7}")?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "P/E RATING")?;
        for (symbol, value) in &summary.pe_ratings {
            writeln!(self.out, "  {symbol}: {value:.7}")?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "VOLUME WEIGHTED STOCK PRICE")?;
        for (symbol, value) in &summary.window_prices {
            writeln!(self.out, "  {symbol}: {value:.7}")?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "ALL SHARE INDEX")?;
        match summary.index {
            Some(index) => writeln!(self.out, "  {index:.2}")?,
            None => writeln!(self.out, "  unavailable")?,
        }

        if !summary.failures.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "FAILURES")?;
            for failure in &summary.failures {
                writeln!(self.out, "  {failure}")?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
