//! MACD signal rules.
//!
//! - line above signal with positive histogram: bullish, score = min(2.5, |h| * 0.5)
//! - line below signal with negative histogram: bearish, score = max(0.5, 2.5 - |h| * 0.5)
//! - anything else: neutral, score 1.5, strength 5
//!
//! Directional strength is min(10, |h| * 2) in both trending branches.

use crate::domain::signal::{SignalResult, SignalStatus};
use crate::domain::snapshot::MacdValues;

pub fn evaluate_macd(values: Option<&MacdValues>) -> SignalResult {
    let Some(v) = values else {
        return SignalResult::absent();
    };

    let h = v.histogram.abs();
    if v.macd > v.signal && v.histogram > 0.0 {
        SignalResult::new(
            SignalStatus::Bullish,
            (h * 0.5).min(2.5),
            (h * 2.0).min(10.0),
            format!("Golden cross (MACD {:.2} > signal {:.2})", v.macd, v.signal),
        )
    } else if v.macd < v.signal && v.histogram < 0.0 {
        SignalResult::new(
            SignalStatus::Bearish,
            (2.5 - h * 0.5).max(0.5),
            (h * 2.0).min(10.0),
            format!("Death cross (MACD {:.2} < signal {:.2})", v.macd, v.signal),
        )
    } else {
        SignalResult::new(
            SignalStatus::Neutral,
            1.5,
            5.0,
            format!("Waiting (histogram {:.2})", v.histogram),
        )
    }
}
