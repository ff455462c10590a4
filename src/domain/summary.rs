//! Portfolio-level roll-up of per-holding advice.

use crate::domain::advice::{HoldingAction, HoldingAdvice};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub hold: usize,
    pub buy_more: usize,
    pub reduce: usize,
    pub sell: usize,
}

impl ActionCounts {
    pub fn get(&self, action: HoldingAction) -> usize {
        match action {
            HoldingAction::Hold => self.hold,
            HoldingAction::BuyMore => self.buy_more,
            HoldingAction::Reduce => self.reduce,
            HoldingAction::Sell => self.sell,
        }
    }

    fn bump(&mut self, action: HoldingAction) {
        match action {
            HoldingAction::Hold => self.hold += 1,
            HoldingAction::BuyMore => self.buy_more += 1,
            HoldingAction::Reduce => self.reduce += 1,
            HoldingAction::Sell => self.sell += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_holdings: usize,
    pub actions: ActionCounts,
    pub avg_confidence: f64,
    /// Holdings with any action other than HOLD.
    pub need_action: usize,
    /// SELL + REDUCE.
    pub high_risk: usize,
    /// BUY_MORE.
    pub opportunities: usize,
    pub suggestion: String,
}

impl PortfolioSummary {
    pub fn compute(advice: &[HoldingAdvice]) -> Self {
        let mut actions = ActionCounts::default();
        for a in advice {
            actions.bump(a.action);
        }

        let avg_confidence = if advice.is_empty() {
            0.0
        } else {
            (advice.iter().map(|a| a.confidence).sum::<f64>() / advice.len() as f64).round()
        };

        let total_holdings = advice.len();
        let high_risk = actions.sell + actions.reduce;
        let opportunities = actions.buy_more;

        PortfolioSummary {
            total_holdings,
            actions,
            avg_confidence,
            need_action: total_holdings - actions.hold,
            high_risk,
            opportunities,
            suggestion: suggestion(total_holdings, &actions),
        }
    }
}

fn suggestion(total: usize, actions: &ActionCounts) -> String {
    if total == 0 {
        "No holdings to analyse.".to_string()
    } else if actions.sell > 0 {
        format!(
            "{} holding(s) flagged SELL; review those positions first.",
            actions.sell
        )
    } else if actions.reduce > 0 {
        format!(
            "{} holding(s) flagged REDUCE; consider trimming exposure.",
            actions.reduce
        )
    } else if actions.buy_more > 0 {
        format!(
            "{} holding(s) look like opportunities to add.",
            actions.buy_more
        )
    } else {
        "All holdings on HOLD; no action needed.".to_string()
    }
}
