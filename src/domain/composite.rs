//! Composite signal: aggregation of the four indicator results.
//!
//! Directional weight is the sum of `strength` over bullish (resp. bearish)
//! results; neutral results contribute to neither side. The 0–10 total is the
//! plain sum of the four `score`s and is independent of direction.

use crate::domain::evaluator::{evaluate_all, IndicatorSignals};
use crate::domain::signal::SignalStatus;
use crate::domain::snapshot::IndicatorSnapshot;
use std::fmt;

/// One side must outweigh the other by strictly more than this factor.
pub const DECISION_MARGIN: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "BUY"),
            Recommendation::Sell => write!(f, "SELL"),
            Recommendation::Hold => write!(f, "HOLD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSignal {
    pub signals: IndicatorSignals,
    pub bullish_weight: f64,
    pub bearish_weight: f64,
    pub bullish_percent: f64,
    pub bearish_percent: f64,
    pub total_signal_score: f64,
    pub recommendation: Recommendation,
}

impl CompositeSignal {
    pub fn from_signals(signals: IndicatorSignals) -> Self {
        let mut bullish_weight = 0.0;
        let mut bearish_weight = 0.0;
        let mut total_signal_score = 0.0;

        for (_, r) in signals.iter() {
            match r.status {
                SignalStatus::Bullish => bullish_weight += r.strength,
                SignalStatus::Bearish => bearish_weight += r.strength,
                SignalStatus::Neutral => {}
            }
            total_signal_score += r.score;
        }

        let (bullish_percent, bearish_percent) = direction_split(bullish_weight, bearish_weight);
        let recommendation = recommend(bullish_weight, bearish_weight);

        CompositeSignal {
            signals,
            bullish_weight,
            bearish_weight,
            bullish_percent,
            bearish_percent,
            total_signal_score,
            recommendation,
        }
    }
}

/// Evaluate all four indicators of a snapshot and aggregate them.
pub fn score_snapshot(snapshot: &IndicatorSnapshot) -> CompositeSignal {
    let composite = CompositeSignal::from_signals(evaluate_all(snapshot));
    tracing::debug!(
        symbol = snapshot.label(),
        bullish_weight = composite.bullish_weight,
        bearish_weight = composite.bearish_weight,
        total_signal_score = composite.total_signal_score,
        recommendation = %composite.recommendation,
        "snapshot scored"
    );
    composite
}

/// Strict-margin decision rule: 6 vs 4 (exactly 1.5x) is still HOLD.
pub fn recommend(bullish_weight: f64, bearish_weight: f64) -> Recommendation {
    if bullish_weight > bearish_weight * DECISION_MARGIN {
        Recommendation::Buy
    } else if bearish_weight > bullish_weight * DECISION_MARGIN {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}

/// Whole-number bullish/bearish percentages, each side rounded on its own.
/// 50/50 when neither side has weight. An exact .5 split rounds both sides up,
/// so the pair can sum to 101.
pub fn direction_split(bullish_weight: f64, bearish_weight: f64) -> (f64, f64) {
    let total = bullish_weight + bearish_weight;
    if total <= 0.0 {
        return (50.0, 50.0);
    }
    (
        (bullish_weight / total * 100.0).round(),
        (bearish_weight / total * 100.0).round(),
    )
}
