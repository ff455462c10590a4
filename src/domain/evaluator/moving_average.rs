//! Moving-average regime rules (MA50 vs MA200).
//!
//! Golden cross (MA50 > MA200) is bullish, everything else bearish, both with
//! strength 8. The score depends on where the current price sits relative to
//! the two averages.

use crate::domain::signal::{SignalResult, SignalStatus};

const REGIME_STRENGTH: f64 = 8.0;

pub fn evaluate_moving_averages(
    ma50: Option<f64>,
    ma200: Option<f64>,
    current_price: f64,
) -> SignalResult {
    let (Some(ma50), Some(ma200)) = (ma50, ma200) else {
        return SignalResult::absent();
    };

    let above50 = current_price > ma50;
    let above200 = current_price > ma200;
    let detail = format!(
        "price {} MA50 | price {} MA200",
        if above50 { "above" } else { "below" },
        if above200 { "above" } else { "below" },
    );

    let result = if ma50 > ma200 {
        // With MA50 above MA200, price above MA50 implies price above MA200.
        if above50 && above200 {
            SignalResult::new(
                SignalStatus::Bullish,
                2.5,
                REGIME_STRENGTH,
                "Golden cross (MA50 > MA200)",
            )
        } else {
            SignalResult::new(
                SignalStatus::Bullish,
                1.2,
                REGIME_STRENGTH,
                "Golden cross, price below the averages",
            )
        }
    } else if current_price < ma50 && current_price < ma200 {
        SignalResult::new(
            SignalStatus::Bearish,
            0.5,
            REGIME_STRENGTH,
            "Death cross (MA50 <= MA200)",
        )
    } else if above200 {
        SignalResult::new(
            SignalStatus::Bearish,
            1.5,
            REGIME_STRENGTH,
            "Death cross, price above MA200",
        )
    } else {
        SignalResult::new(SignalStatus::Bearish, 1.0, REGIME_STRENGTH, "Death cross")
    };

    result.with_detail(detail)
}
