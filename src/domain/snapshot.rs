//! Indicator snapshot: the precomputed inputs for one evaluation.
//!
//! Every indicator is optional. Loading from a [`ConfigPort`] validates the
//! numbers once at the boundary so the evaluators never see non-finite input.

use crate::domain::error::SigscoreError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValues {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdValues {
    pub fn new(macd: f64, signal: f64, histogram: f64) -> Self {
        MacdValues {
            macd,
            signal,
            histogram,
        }
    }

    /// histogram = macd - signal
    pub fn from_lines(macd: f64, signal: f64) -> Self {
        Self::new(macd, signal, macd - signal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    pub fn new(upper: f64, middle: f64, lower: f64) -> Self {
        BollingerBands {
            upper,
            middle,
            lower,
        }
    }

    /// (upper - lower) / middle * 100
    pub fn bandwidth_pct(&self) -> f64 {
        (self.upper - self.lower) / self.middle * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub symbol: Option<String>,
    pub as_of: Option<NaiveDate>,
    pub current_price: f64,
    pub rsi: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,
    pub macd: Option<MacdValues>,
    pub bollinger: Option<BollingerBands>,
}

impl IndicatorSnapshot {
    /// A snapshot with a price and no indicators.
    pub fn new(current_price: f64) -> Self {
        IndicatorSnapshot {
            symbol: None,
            as_of: None,
            current_price,
            rsi: None,
            ma50: None,
            ma200: None,
            macd: None,
            bollinger: None,
        }
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_moving_averages(mut self, ma50: f64, ma200: f64) -> Self {
        self.ma50 = Some(ma50);
        self.ma200 = Some(ma200);
        self
    }

    pub fn with_macd(mut self, macd: MacdValues) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger(mut self, bands: BollingerBands) -> Self {
        self.bollinger = Some(bands);
        self
    }

    pub fn label(&self) -> &str {
        self.symbol.as_deref().unwrap_or("-")
    }
}

/// Build a snapshot from an INI-style source.
///
/// Sections: `[snapshot]` (required `current_price`, optional `symbol`, `as_of`),
/// `[rsi]`, `[moving_average]`, `[macd]`, `[bollinger]`. An indicator whose keys
/// are all unset is absent; a partially specified one is an error.
pub fn load_snapshot(config: &dyn ConfigPort) -> Result<IndicatorSnapshot, SigscoreError> {
    let current_price = read_number(config, "snapshot", "current_price")?
        .ok_or_else(|| SigscoreError::missing("snapshot", "current_price"))?;
    if current_price <= 0.0 {
        return Err(SigscoreError::invalid(
            "snapshot",
            "current_price",
            "current_price must be positive",
        ));
    }

    let mut snapshot = IndicatorSnapshot::new(current_price);
    snapshot.symbol = config
        .get_string("snapshot", "symbol")
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty());
    snapshot.as_of = read_date(config, "snapshot", "as_of")?;
    snapshot.rsi = read_rsi(config)?;
    snapshot.ma50 = read_number(config, "moving_average", "ma50")?;
    snapshot.ma200 = read_number(config, "moving_average", "ma200")?;
    snapshot.macd = read_macd(config)?;
    snapshot.bollinger = read_bollinger(config)?;

    tracing::debug!(
        symbol = snapshot.label(),
        current_price,
        rsi = snapshot.rsi.is_some(),
        macd = snapshot.macd.is_some(),
        bollinger = snapshot.bollinger.is_some(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn read_number(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<f64>, SigscoreError> {
    let raw = match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SigscoreError::invalid(section, key, format!("not a number: {}", raw.trim())))?;
    if !value.is_finite() {
        return Err(SigscoreError::invalid(section, key, "value must be finite"));
    }
    Ok(Some(value))
}

fn read_date(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<NaiveDate>, SigscoreError> {
    match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                SigscoreError::invalid(
                    section,
                    key,
                    format!("invalid {} format, expected YYYY-MM-DD", key),
                )
            }),
        _ => Ok(None),
    }
}

fn read_rsi(config: &dyn ConfigPort) -> Result<Option<f64>, SigscoreError> {
    let rsi = read_number(config, "rsi", "value")?;
    if let Some(v) = rsi {
        if !(0.0..=100.0).contains(&v) {
            return Err(SigscoreError::invalid(
                "rsi",
                "value",
                "rsi must be between 0 and 100",
            ));
        }
    }
    Ok(rsi)
}

fn read_macd(config: &dyn ConfigPort) -> Result<Option<MacdValues>, SigscoreError> {
    let macd = read_number(config, "macd", "macd")?;
    let signal = read_number(config, "macd", "signal")?;
    let histogram = read_number(config, "macd", "histogram")?;

    match (macd, signal, histogram) {
        (None, None, None) => Ok(None),
        (Some(m), Some(s), Some(h)) => Ok(Some(MacdValues::new(m, s, h))),
        (Some(m), Some(s), None) => Ok(Some(MacdValues::from_lines(m, s))),
        (None, _, _) => Err(SigscoreError::missing("macd", "macd")),
        (Some(_), None, _) => Err(SigscoreError::missing("macd", "signal")),
    }
}

fn read_bollinger(config: &dyn ConfigPort) -> Result<Option<BollingerBands>, SigscoreError> {
    let upper = read_number(config, "bollinger", "upper")?;
    let middle = read_number(config, "bollinger", "middle")?;
    let lower = read_number(config, "bollinger", "lower")?;

    let bands = match (upper, middle, lower) {
        (None, None, None) => return Ok(None),
        (Some(u), Some(m), Some(l)) => BollingerBands::new(u, m, l),
        (None, _, _) => return Err(SigscoreError::missing("bollinger", "upper")),
        (_, None, _) => return Err(SigscoreError::missing("bollinger", "middle")),
        (_, _, None) => return Err(SigscoreError::missing("bollinger", "lower")),
    };

    if bands.middle <= 0.0 {
        return Err(SigscoreError::invalid(
            "bollinger",
            "middle",
            "middle band must be positive",
        ));
    }
    if bands.lower > bands.middle || bands.middle > bands.upper {
        return Err(SigscoreError::invalid(
            "bollinger",
            "middle",
            "bands must satisfy lower <= middle <= upper",
        ));
    }
    Ok(Some(bands))
}
