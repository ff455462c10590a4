//! Portfolio input/output port trait.

use crate::domain::advice::HoldingAdvice;
use crate::domain::error::SigscoreError;
use crate::domain::holding::Holding;
use crate::domain::snapshot::IndicatorSnapshot;
use std::io::Write;

pub trait PortfolioPort {
    fn load_holdings(&self) -> Result<Vec<Holding>, SigscoreError>;

    fn load_advice(&self) -> Result<Vec<HoldingAdvice>, SigscoreError>;

    /// `Ok(None)` when no snapshot is available for the symbol.
    fn load_snapshot(&self, symbol: &str) -> Result<Option<IndicatorSnapshot>, SigscoreError>;

    fn save_advice(
        &self,
        advice: &[HoldingAdvice],
        out: &mut dyn Write,
    ) -> Result<(), SigscoreError>;
}
