//! Acceptance intervals for user-edited advice prices.
//!
//! | kind           | min          | max          |
//! |----------------|--------------|--------------|
//! | stop_loss      | 0.70 * price | 0.95 * price |
//! | add_more_price | 0.80 * price | 0.98 * price |
//! | target_price   | 1.02 * price | 1.50 * price |

use crate::domain::advice::HoldingAdvice;
use crate::domain::error::PriceOverrideError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    StopLoss,
    AddMorePrice,
    TargetPrice,
}

impl PriceKind {
    pub const ALL: [PriceKind; 3] = [
        PriceKind::StopLoss,
        PriceKind::AddMorePrice,
        PriceKind::TargetPrice,
    ];

    /// (min, max) multipliers of the current price.
    pub fn factors(self) -> (f64, f64) {
        match self {
            PriceKind::StopLoss => (0.70, 0.95),
            PriceKind::AddMorePrice => (0.80, 0.98),
            PriceKind::TargetPrice => (1.02, 1.50),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceKind::StopLoss => "stop_loss",
            PriceKind::AddMorePrice => "add_more_price",
            PriceKind::TargetPrice => "target_price",
        }
    }
}

impl fmt::Display for PriceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "stop_loss" => Ok(PriceKind::StopLoss),
            "add_more_price" => Ok(PriceKind::AddMorePrice),
            "target_price" => Ok(PriceKind::TargetPrice),
            other => Err(format!("unknown price kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBound {
    pub min: f64,
    pub max: f64,
}

impl PriceBound {
    pub fn for_kind(current_price: f64, kind: PriceKind) -> Self {
        let (lo, hi) = kind.factors();
        PriceBound {
            min: current_price * lo,
            max: current_price * hi,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Check a proposed price against its interval without touching any advice.
pub fn validate_override(
    current_price: f64,
    kind: PriceKind,
    value: f64,
) -> Result<PriceBound, PriceOverrideError> {
    if !value.is_finite() {
        return Err(PriceOverrideError::NotFinite { kind });
    }
    let bound = PriceBound::for_kind(current_price, kind);
    if !bound.contains(value) {
        return Err(PriceOverrideError::OutOfRange {
            kind,
            value,
            min: bound.min,
            max: bound.max,
        });
    }
    Ok(bound)
}

/// Validate `value` and, if accepted, store it on the advice for `symbol`.
/// On any error the list is left unmodified.
pub fn apply_price_override(
    advice: &mut [HoldingAdvice],
    symbol: &str,
    kind: PriceKind,
    current_price: f64,
    value: f64,
) -> Result<PriceBound, PriceOverrideError> {
    let entry = advice
        .iter_mut()
        .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| PriceOverrideError::UnknownSymbol(symbol.to_string()))?;

    let bound = match validate_override(current_price, kind, value) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(symbol, %kind, value, "price override rejected: {e}");
            return Err(e);
        }
    };

    entry.set_price(kind, value);
    tracing::info!(symbol, %kind, value, "price override applied");
    Ok(bound)
}

/// Percentage distance of `price` from `current_price`: (price / current - 1) * 100.
pub fn offset_pct(price: f64, current_price: f64) -> f64 {
    if current_price == 0.0 {
        return 0.0;
    }
    (price / current_price - 1.0) * 100.0
}
