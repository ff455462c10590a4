//! Bollinger-band position rules.

use crate::domain::signal::{SignalResult, SignalStatus};
use crate::domain::snapshot::BollingerBands;

const BREAKOUT_STRENGTH: f64 = 7.0;
const IN_BAND_STRENGTH: f64 = 5.0;

pub fn evaluate_bollinger(bands: Option<&BollingerBands>, current_price: f64) -> SignalResult {
    let Some(b) = bands else {
        return SignalResult::absent();
    };

    let bandwidth = b.bandwidth_pct();
    let result = if current_price > b.upper {
        SignalResult::new(
            SignalStatus::Bearish,
            0.8,
            BREAKOUT_STRENGTH,
            format!(
                "Breakout above upper band ({:.2} > {:.2})",
                current_price, b.upper
            ),
        )
    } else if current_price < b.lower {
        SignalResult::new(
            SignalStatus::Bullish,
            2.5,
            BREAKOUT_STRENGTH,
            format!(
                "Breakdown below lower band ({:.2} < {:.2})",
                current_price, b.lower
            ),
        )
    } else if current_price > b.middle {
        SignalResult::new(
            SignalStatus::Neutral,
            1.5,
            IN_BAND_STRENGTH,
            "Upper half",
        )
    } else {
        SignalResult::new(
            SignalStatus::Neutral,
            1.2,
            IN_BAND_STRENGTH,
            "Lower half",
        )
    };

    result.with_detail(format!("bandwidth {:.2}%", bandwidth))
}
