//! Plain-text console report adapter implementing ReportPort.

use crate::domain::advice::HoldingAdvice;
use crate::domain::composite::CompositeSignal;
use crate::domain::holding::{find_holding, Holding, PortfolioStats};
use crate::domain::price_bound::{offset_pct, PriceKind};
use crate::domain::signal::MAX_SCORE;
use crate::domain::snapshot::IndicatorSnapshot;
use crate::domain::summary::PortfolioSummary;
use crate::ports::report_port::{PortfolioReport, ReportPort};

const RULE: &str = "------------------------------------------------------------\n";

pub struct TextReportAdapter {
    show_detail: bool,
}

impl TextReportAdapter {
    pub fn new(show_detail: bool) -> Self {
        Self { show_detail }
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn fmt_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

impl TextReportAdapter {
    fn render_composite(&self, composite: &CompositeSignal) -> String {
        let max_total = MAX_SCORE * 4.0;
        let mut output = String::new();
        output.push_str(&format!(
            "Total score: {:.2} / {:.2}\n",
            composite.total_signal_score, max_total
        ));
        output.push_str(&format!("Recommendation: {}\n", composite.recommendation));
        output.push_str(&format!(
            "Bullish {:.0}% | Bearish {:.0}%\n",
            composite.bullish_percent, composite.bearish_percent
        ));
        output.push('\n');

        for (kind, result) in composite.signals.iter() {
            output.push_str(&format!(
                "  {:<16} {:<8} score {:.2}  strength {:>4.1}/10  {}\n",
                kind.to_string(),
                result.status.to_string(),
                result.score,
                result.strength,
                result.text
            ));
            if let Some(detail) = result.detail.as_ref().filter(|_| self.show_detail) {
                output.push_str(&format!("  {:<16} {}\n", "", detail));
            }
        }
        output
    }

    fn render_stats(&self, holdings: &[Holding], stats: &PortfolioStats) -> String {
        let mut output = String::new();
        output.push_str("Portfolio\n");
        output.push_str(RULE);
        output.push_str(&format!("Holdings:     {}\n", holdings.len()));
        output.push_str(&format!("Total cost:   {:.2}\n", stats.total_cost));
        output.push_str(&format!("Total value:  {:.2}\n", stats.total_value));
        output.push_str(&format!(
            "Total P&L:    {} ({}%)\n",
            fmt_signed(stats.total_pnl),
            fmt_signed(stats.total_pnl_percent)
        ));
        if let Some(best) = &stats.best_performer {
            output.push_str(&format!("Best:         {}\n", best));
        }
        if let Some(worst) = &stats.worst_performer {
            output.push_str(&format!("Worst:        {}\n", worst));
        }
        output
    }

    fn render_summary(&self, summary: &PortfolioSummary) -> String {
        let mut output = String::new();
        output.push_str("Summary\n");
        output.push_str(RULE);
        output.push_str(&format!(
            "SELL {} | BUY_MORE {} | REDUCE {} | HOLD {}\n",
            summary.actions.sell,
            summary.actions.buy_more,
            summary.actions.reduce,
            summary.actions.hold
        ));
        output.push_str(&format!(
            "Average confidence: {:.0}%\n",
            summary.avg_confidence
        ));
        output.push_str(&format!(
            "Need action: {} | High risk: {} | Opportunities: {}\n",
            summary.need_action, summary.high_risk, summary.opportunities
        ));
        output.push_str(&format!("{}\n", summary.suggestion));
        output
    }

    fn render_advice(&self, rank: usize, advice: &HoldingAdvice, holdings: &[Holding]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}. {} {} ({:.0}%, {} confidence)\n",
            rank,
            advice.symbol,
            advice.action,
            advice.confidence,
            advice.confidence_level()
        ));

        let current = find_holding(holdings, &advice.symbol).map(|h| h.current_price);
        for kind in PriceKind::ALL {
            let price = advice.price(kind);
            match current {
                Some(c) => output.push_str(&format!(
                    "   {:<15} {:>10.2} ({}%)\n",
                    kind.as_str(),
                    price,
                    fmt_signed(offset_pct(price, c))
                )),
                None => output.push_str(&format!("   {:<15} {:>10.2}\n", kind.as_str(), price)),
            }
        }

        if !advice.reasoning.is_empty() {
            output.push_str(&format!("   {}\n", advice.reasoning));
        }

        if let Some(composite) = &advice.technical_signals {
            output.push_str(&format!(
                "   signals: {} (score {:.2}, bullish {:.0}% | bearish {:.0}%)\n",
                composite.recommendation,
                composite.total_signal_score,
                composite.bullish_percent,
                composite.bearish_percent
            ));
            if self.show_detail {
                for (kind, result) in composite.signals.iter() {
                    output.push_str(&format!("     {}: {}\n", kind, result.text));
                }
            }
        }
        output
    }
}

impl ReportPort for TextReportAdapter {
    fn render_signal(&self, snapshot: &IndicatorSnapshot, composite: &CompositeSignal) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} @ {:.2}",
            snapshot.label(),
            snapshot.current_price
        ));
        if let Some(date) = snapshot.as_of {
            output.push_str(&format!(" ({})", date));
        }
        output.push('\n');
        output.push_str(RULE);
        output.push_str(&self.render_composite(composite));
        output
    }

    fn render_portfolio(&self, report: &PortfolioReport<'_>) -> String {
        let mut output = String::new();
        output.push_str(&self.render_stats(report.holdings, report.stats));
        output.push('\n');
        output.push_str(&self.render_summary(report.summary));
        output.push('\n');
        output.push_str("Advice\n");
        output.push_str(RULE);
        if report.advice.is_empty() {
            output.push_str("No advice.\n");
        }
        for (i, advice) in report.advice.iter().enumerate() {
            output.push_str(&self.render_advice(i + 1, advice, report.holdings));
        }
        output
    }
}
