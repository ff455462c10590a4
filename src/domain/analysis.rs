//! Portfolio analysis pipeline.
//!
//! Loads holdings and advice through a [`PortfolioPort`], attaches a composite
//! signal to every advice entry that has a snapshot, puts the advice in
//! priority order and rolls up statistics and the summary.

use crate::domain::advice::{prioritize, HoldingAdvice};
use crate::domain::composite::score_snapshot;
use crate::domain::error::SigscoreError;
use crate::domain::holding::{find_holding, Holding, PortfolioStats};
use crate::domain::summary::PortfolioSummary;
use crate::ports::portfolio_port::PortfolioPort;
use crate::ports::report_port::PortfolioReport;

#[derive(Debug, Clone)]
pub struct PortfolioAnalysis {
    pub holdings: Vec<Holding>,
    /// In priority order.
    pub advice: Vec<HoldingAdvice>,
    pub stats: PortfolioStats,
    pub summary: PortfolioSummary,
    /// Symbols that had no snapshot and were left unscored.
    pub unscored: Vec<String>,
}

impl PortfolioAnalysis {
    pub fn report(&self) -> PortfolioReport<'_> {
        PortfolioReport {
            holdings: &self.holdings,
            advice: &self.advice,
            stats: &self.stats,
            summary: &self.summary,
        }
    }
}

pub fn analyze_portfolio(port: &dyn PortfolioPort) -> Result<PortfolioAnalysis, SigscoreError> {
    let holdings = port.load_holdings()?;
    let mut advice = port.load_advice()?;
    let mut unscored = Vec::new();

    for entry in advice.iter_mut() {
        if find_holding(&holdings, &entry.symbol).is_none() {
            tracing::warn!(symbol = %entry.symbol, "advice has no matching holding");
        }
        match port.load_snapshot(&entry.symbol)? {
            Some(snapshot) => {
                entry.technical_signals = Some(score_snapshot(&snapshot));
            }
            None => {
                tracing::warn!(symbol = %entry.symbol, "no snapshot, skipping signal scoring");
                unscored.push(entry.symbol.clone());
            }
        }
    }

    prioritize(&mut advice);

    let stats = PortfolioStats::compute(&holdings);
    let summary = PortfolioSummary::compute(&advice);
    tracing::info!(
        holdings = holdings.len(),
        advice = advice.len(),
        unscored = unscored.len(),
        "portfolio analysed"
    );

    Ok(PortfolioAnalysis {
        holdings,
        advice,
        stats,
        summary,
        unscored,
    })
}
