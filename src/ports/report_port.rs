//! Report rendering port trait.

use crate::domain::advice::HoldingAdvice;
use crate::domain::composite::CompositeSignal;
use crate::domain::error::SigscoreError;
use crate::domain::holding::{Holding, PortfolioStats};
use crate::domain::snapshot::IndicatorSnapshot;
use crate::domain::summary::PortfolioSummary;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Prompt,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "prompt" => Ok(ReportFormat::Prompt),
            other => Err(format!("unknown report format: {} (expected text or prompt)", other)),
        }
    }
}

/// Everything a portfolio report shows. `advice` is expected in display order.
pub struct PortfolioReport<'a> {
    pub holdings: &'a [Holding],
    pub advice: &'a [HoldingAdvice],
    pub stats: &'a PortfolioStats,
    pub summary: &'a PortfolioSummary,
}

pub trait ReportPort {
    fn render_signal(&self, snapshot: &IndicatorSnapshot, composite: &CompositeSignal) -> String;

    fn render_portfolio(&self, report: &PortfolioReport<'_>) -> String;

    /// Default implementation: write the rendered text to `output`, or stdout when `None`.
    fn write_signal(
        &self,
        snapshot: &IndicatorSnapshot,
        composite: &CompositeSignal,
        output: Option<&Path>,
    ) -> Result<(), SigscoreError> {
        write_output(&self.render_signal(snapshot, composite), output)
    }

    fn write_portfolio(
        &self,
        report: &PortfolioReport<'_>,
        output: Option<&Path>,
    ) -> Result<(), SigscoreError> {
        write_output(&self.render_portfolio(report), output)
    }
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), SigscoreError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
