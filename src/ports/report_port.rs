//! Report output port trait.

use crate::domain::error::ValuationError;
use crate::domain::valuation::ValuationSummary;

/// Port for writing a valuation run's results.
pub trait ReportPort {
    fn write(&mut self, summary: &ValuationSummary) -> Result<(), ValuationError>;
}
