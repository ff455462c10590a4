//! CSV portfolio adapter.
//!
//! Holdings:  `symbol,quantity,buy_price,current_price`
//! Advice:    `symbol,action,confidence,stop_loss,add_more_price,target_price,reasoning`
//! Snapshots: one `<SYMBOL>.ini` file per instrument in an optional directory.

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::advice::{HoldingAction, HoldingAdvice};
use crate::domain::error::SigscoreError;
use crate::domain::holding::Holding;
use crate::domain::snapshot::{load_snapshot, IndicatorSnapshot};
use crate::ports::portfolio_port::PortfolioPort;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct HoldingRecord {
    symbol: String,
    quantity: f64,
    buy_price: f64,
    current_price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct AdviceRecord {
    symbol: String,
    action: String,
    confidence: f64,
    stop_loss: f64,
    add_more_price: f64,
    target_price: f64,
    #[serde(default)]
    reasoning: String,
}

impl From<&HoldingAdvice> for AdviceRecord {
    fn from(a: &HoldingAdvice) -> Self {
        AdviceRecord {
            symbol: a.symbol.clone(),
            action: a.action.to_string(),
            confidence: a.confidence,
            stop_loss: a.stop_loss,
            add_more_price: a.add_more_price,
            target_price: a.target_price,
            reasoning: a.reasoning.clone(),
        }
    }
}

pub struct CsvAdapter {
    holdings_path: PathBuf,
    advice_path: PathBuf,
    snapshot_dir: Option<PathBuf>,
}

impl CsvAdapter {
    pub fn new(holdings_path: PathBuf, advice_path: PathBuf) -> Self {
        Self {
            holdings_path,
            advice_path,
            snapshot_dir: None,
        }
    }

    pub fn with_snapshot_dir(mut self, dir: PathBuf) -> Self {
        self.snapshot_dir = Some(dir);
        self
    }

    fn snapshot_path(&self, symbol: &str) -> Option<PathBuf> {
        self.snapshot_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.ini", symbol.to_uppercase())))
    }
}

fn open(path: &Path) -> Result<File, SigscoreError> {
    File::open(path).map_err(|e| SigscoreError::DataParse {
        file: path.display().to_string(),
        reason: format!("failed to open: {}", e),
    })
}

fn data_error(file: &str, reason: impl Into<String>) -> SigscoreError {
    SigscoreError::DataParse {
        file: file.to_string(),
        reason: reason.into(),
    }
}

fn normalize_symbol(file: &str, raw: &str, seen: &mut HashSet<String>) -> Result<String, SigscoreError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(data_error(file, "empty symbol"));
    }
    if !seen.insert(symbol.clone()) {
        return Err(data_error(file, format!("duplicate symbol: {}", symbol)));
    }
    Ok(symbol)
}

fn require_finite(file: &str, symbol: &str, field: &str, value: f64) -> Result<f64, SigscoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(data_error(file, format!("{}: {} must be finite", symbol, field)))
    }
}

/// Parse holdings CSV from any reader. `file` labels errors.
pub fn parse_holdings<R: Read>(reader: R, file: &str) -> Result<Vec<Holding>, SigscoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen = HashSet::new();
    let mut holdings = Vec::new();

    for result in rdr.deserialize::<HoldingRecord>() {
        let rec = result.map_err(|e| data_error(file, format!("CSV parse error: {}", e)))?;
        let symbol = normalize_symbol(file, &rec.symbol, &mut seen)?;
        let quantity = require_finite(file, &symbol, "quantity", rec.quantity)?;
        let buy_price = require_finite(file, &symbol, "buy_price", rec.buy_price)?;
        let current_price = require_finite(file, &symbol, "current_price", rec.current_price)?;
        if current_price <= 0.0 {
            return Err(data_error(
                file,
                format!("{}: current_price must be positive", symbol),
            ));
        }
        holdings.push(Holding::new(&symbol, quantity, buy_price, current_price));
    }

    Ok(holdings)
}

/// Parse advice CSV from any reader. `file` labels errors.
pub fn parse_advice<R: Read>(reader: R, file: &str) -> Result<Vec<HoldingAdvice>, SigscoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen = HashSet::new();
    let mut advice = Vec::new();

    for result in rdr.deserialize::<AdviceRecord>() {
        let rec = result.map_err(|e| data_error(file, format!("CSV parse error: {}", e)))?;
        let symbol = normalize_symbol(file, &rec.symbol, &mut seen)?;
        let action: HoldingAction = rec
            .action
            .parse()
            .map_err(|e: String| data_error(file, format!("{}: {}", symbol, e)))?;
        let confidence = require_finite(file, &symbol, "confidence", rec.confidence)?;
        if !(0.0..=100.0).contains(&confidence) {
            return Err(data_error(
                file,
                format!("{}: confidence must be between 0 and 100", symbol),
            ));
        }

        let mut entry = HoldingAdvice::new(&symbol, action, confidence);
        entry.stop_loss = require_finite(file, &symbol, "stop_loss", rec.stop_loss)?;
        entry.add_more_price = require_finite(file, &symbol, "add_more_price", rec.add_more_price)?;
        entry.target_price = require_finite(file, &symbol, "target_price", rec.target_price)?;
        entry.reasoning = rec.reasoning;
        advice.push(entry);
    }

    Ok(advice)
}

pub fn write_advice(advice: &[HoldingAdvice], out: &mut dyn Write) -> Result<(), SigscoreError> {
    let mut wtr = csv::Writer::from_writer(out);
    for a in advice {
        wtr.serialize(AdviceRecord::from(a))
            .map_err(std::io::Error::other)?;
    }
    wtr.flush()?;
    Ok(())
}

impl PortfolioPort for CsvAdapter {
    fn load_holdings(&self) -> Result<Vec<Holding>, SigscoreError> {
        let file = open(&self.holdings_path)?;
        let holdings = parse_holdings(file, &self.holdings_path.display().to_string())?;
        tracing::info!(
            path = %self.holdings_path.display(),
            count = holdings.len(),
            "holdings loaded"
        );
        Ok(holdings)
    }

    fn load_advice(&self) -> Result<Vec<HoldingAdvice>, SigscoreError> {
        let file = open(&self.advice_path)?;
        let advice = parse_advice(file, &self.advice_path.display().to_string())?;
        tracing::info!(
            path = %self.advice_path.display(),
            count = advice.len(),
            "advice loaded"
        );
        Ok(advice)
    }

    fn load_snapshot(&self, symbol: &str) -> Result<Option<IndicatorSnapshot>, SigscoreError> {
        let Some(path) = self.snapshot_path(symbol) else {
            return Ok(None);
        };
        if !path.is_file() {
            tracing::debug!(symbol, path = %path.display(), "no snapshot file");
            return Ok(None);
        }

        let adapter =
            FileConfigAdapter::from_file(&path).map_err(|e| SigscoreError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let mut snapshot = load_snapshot(&adapter)?;
        if snapshot.symbol.is_none() {
            snapshot.symbol = Some(symbol.to_uppercase());
        }
        Ok(Some(snapshot))
    }

    fn save_advice(
        &self,
        advice: &[HoldingAdvice],
        out: &mut dyn Write,
    ) -> Result<(), SigscoreError> {
        write_advice(advice, out)
    }
}
