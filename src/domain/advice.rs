//! Per-holding advice and its priority ordering.

use crate::domain::composite::CompositeSignal;
use crate::domain::price_bound::PriceKind;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldingAction {
    Hold,
    BuyMore,
    Reduce,
    Sell,
}

impl HoldingAction {
    pub const ALL: [HoldingAction; 4] = [
        HoldingAction::Hold,
        HoldingAction::BuyMore,
        HoldingAction::Reduce,
        HoldingAction::Sell,
    ];

    /// Lower ranks come first: SELL, BUY_MORE, REDUCE, then HOLD.
    pub fn urgency_rank(self) -> u8 {
        match self {
            HoldingAction::Sell => 0,
            HoldingAction::BuyMore => 1,
            HoldingAction::Reduce => 2,
            HoldingAction::Hold => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HoldingAction::Hold => "HOLD",
            HoldingAction::BuyMore => "BUY_MORE",
            HoldingAction::Reduce => "REDUCE",
            HoldingAction::Sell => "SELL",
        }
    }
}

impl fmt::Display for HoldingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoldingAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HOLD" => Ok(HoldingAction::Hold),
            "BUY_MORE" => Ok(HoldingAction::BuyMore),
            "REDUCE" => Ok(HoldingAction::Reduce),
            "SELL" => Ok(HoldingAction::Sell),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceLevel::High
        } else if confidence >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "high"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingAdvice {
    pub symbol: String,
    pub action: HoldingAction,
    pub confidence: f64,
    pub stop_loss: f64,
    pub add_more_price: f64,
    pub target_price: f64,
    pub reasoning: String,
    pub technical_signals: Option<CompositeSignal>,
}

impl HoldingAdvice {
    pub fn new(symbol: &str, action: HoldingAction, confidence: f64) -> Self {
        HoldingAdvice {
            symbol: symbol.to_string(),
            action,
            confidence,
            stop_loss: 0.0,
            add_more_price: 0.0,
            target_price: 0.0,
            reasoning: String::new(),
            technical_signals: None,
        }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    pub fn price(&self, kind: PriceKind) -> f64 {
        match kind {
            PriceKind::StopLoss => self.stop_loss,
            PriceKind::AddMorePrice => self.add_more_price,
            PriceKind::TargetPrice => self.target_price,
        }
    }

    pub fn set_price(&mut self, kind: PriceKind, value: f64) {
        match kind {
            PriceKind::StopLoss => self.stop_loss = value,
            PriceKind::AddMorePrice => self.add_more_price = value,
            PriceKind::TargetPrice => self.target_price = value,
        }
    }
}

/// SELL before BUY_MORE before REDUCE before HOLD; within one action, higher
/// confidence first.
pub fn priority_order(a: &HoldingAdvice, b: &HoldingAdvice) -> Ordering {
    a.action
        .urgency_rank()
        .cmp(&b.action.urgency_rank())
        .then_with(|| b.confidence.total_cmp(&a.confidence))
}

/// Stable in-place sort: equal action and confidence keep their input order.
pub fn prioritize(advice: &mut [HoldingAdvice]) {
    advice.sort_by(priority_order);
    tracing::debug!(count = advice.len(), "advice prioritized");
}
