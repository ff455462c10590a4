//! RSI signal rules.
//!
//! Overbought (> 70) is bearish, oversold (< 30) is bullish. Everything in
//! `[30, 70]` is neutral, split at 50 into "relatively strong" and "relatively
//! weak". Comparisons against 70 and 30 are strict, so both boundaries land in
//! the neutral branches.

use crate::domain::signal::{SignalResult, SignalStatus};

pub const OVERBOUGHT: f64 = 70.0;
pub const OVERSOLD: f64 = 30.0;

pub fn evaluate_rsi(rsi: Option<f64>) -> SignalResult {
    let Some(rsi) = rsi else {
        return SignalResult::absent();
    };

    if rsi > OVERBOUGHT {
        // score goes negative above 85 and is clamped to 0 by SignalResult::new
        SignalResult::new(
            SignalStatus::Bearish,
            0.5 + (80.0 - rsi) / 10.0,
            ((rsi - OVERBOUGHT) / 3.0).min(10.0),
            format!("Overbought ({:.1})", rsi),
        )
    } else if rsi < OVERSOLD {
        SignalResult::new(
            SignalStatus::Bullish,
            2.5,
            ((OVERSOLD - rsi) / 3.0).min(10.0),
            format!("Oversold ({:.1})", rsi),
        )
    } else if rsi >= 50.0 {
        SignalResult::new(
            SignalStatus::Neutral,
            1.5 + (rsi - 50.0) / 20.0,
            (rsi - 50.0) / 5.0,
            format!("Relatively strong ({:.1})", rsi),
        )
    } else {
        SignalResult::new(
            SignalStatus::Neutral,
            1.0 + rsi / 50.0,
            (50.0 - rsi) / 5.0,
            format!("Relatively weak ({:.1})", rsi),
        )
    }
}
