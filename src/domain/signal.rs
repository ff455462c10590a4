//! Per-indicator signal classification.

use std::fmt;

/// Upper bound of a single indicator's score contribution.
pub const MAX_SCORE: f64 = 2.5;
/// Upper bound of a single indicator's directional strength.
pub const MAX_STRENGTH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalStatus {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStatus::Bullish => write!(f, "bullish"),
            SignalStatus::Bearish => write!(f, "bearish"),
            SignalStatus::Neutral => write!(f, "neutral"),
        }
    }
}

/// Output of one indicator evaluator.
///
/// `score` is clamped to `[0, MAX_SCORE]` and `strength` to `[0, MAX_STRENGTH]`
/// on construction, so every result satisfies both bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalResult {
    pub status: SignalStatus,
    pub score: f64,
    pub strength: f64,
    pub text: String,
    pub detail: Option<String>,
}

impl SignalResult {
    pub fn new(status: SignalStatus, score: f64, strength: f64, text: impl Into<String>) -> Self {
        SignalResult {
            status,
            score: score.clamp(0.0, MAX_SCORE),
            strength: strength.clamp(0.0, MAX_STRENGTH),
            text: text.into(),
            detail: None,
        }
    }

    /// The result for an indicator with no input data.
    pub fn absent() -> Self {
        Self::new(SignalStatus::Neutral, 0.0, 0.0, "no data")
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_absent(&self) -> bool {
        self.status == SignalStatus::Neutral && self.score == 0.0 && self.strength == 0.0
    }
}
