//! Indicator evaluators.
//!
//! One evaluator per indicator family; each is a pure function of its own
//! inputs plus the current price and never looks at the other indicators:
//! - [`macd::evaluate_macd`]
//! - [`rsi::evaluate_rsi`]
//! - [`moving_average::evaluate_moving_averages`]
//! - [`bollinger::evaluate_bollinger`]

pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod rsi;

use crate::domain::signal::SignalResult;
use crate::domain::snapshot::IndicatorSnapshot;
use std::fmt;

pub use bollinger::evaluate_bollinger;
pub use macd::evaluate_macd;
pub use moving_average::evaluate_moving_averages;
pub use rsi::evaluate_rsi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Macd,
    Rsi,
    MovingAverage,
    Bollinger,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Macd,
        IndicatorKind::Rsi,
        IndicatorKind::MovingAverage,
        IndicatorKind::Bollinger,
    ];
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Macd => write!(f, "MACD"),
            IndicatorKind::Rsi => write!(f, "RSI"),
            IndicatorKind::MovingAverage => write!(f, "Moving averages"),
            IndicatorKind::Bollinger => write!(f, "Bollinger bands"),
        }
    }
}

/// The four per-indicator results for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSignals {
    pub macd: SignalResult,
    pub rsi: SignalResult,
    pub moving_average: SignalResult,
    pub bollinger: SignalResult,
}

impl IndicatorSignals {
    pub fn get(&self, kind: IndicatorKind) -> &SignalResult {
        match kind {
            IndicatorKind::Macd => &self.macd,
            IndicatorKind::Rsi => &self.rsi,
            IndicatorKind::MovingAverage => &self.moving_average,
            IndicatorKind::Bollinger => &self.bollinger,
        }
    }

    /// Results in fixed MACD, RSI, MA, Bollinger order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, &SignalResult)> + '_ {
        IndicatorKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

pub fn evaluate_all(snapshot: &IndicatorSnapshot) -> IndicatorSignals {
    IndicatorSignals {
        macd: evaluate_macd(snapshot.macd.as_ref()),
        rsi: evaluate_rsi(snapshot.rsi),
        moving_average: evaluate_moving_averages(
            snapshot.ma50,
            snapshot.ma200,
            snapshot.current_price,
        ),
        bollinger: evaluate_bollinger(snapshot.bollinger.as_ref(), snapshot.current_price),
    }
}
