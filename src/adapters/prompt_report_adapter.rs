//! Prompt-block report adapter implementing ReportPort.
//!
//! Renders the system signal analysis as a plain block meant to be pasted into
//! an AI prompt, followed by the raw indicator values it was computed from.

use crate::domain::composite::CompositeSignal;
use crate::domain::holding::find_holding;
use crate::domain::snapshot::IndicatorSnapshot;
use crate::ports::report_port::{PortfolioReport, ReportPort};

const FENCE: &str = "================================\n";

pub struct PromptReportAdapter;

impl PromptReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn above_below(price: f64, level: f64) -> &'static str {
    if price > level { "above" } else { "below" }
}

fn render_analysis_block(composite: &CompositeSignal) -> String {
    let mut output = String::new();
    output.push_str("System signal analysis:\n");
    output.push_str(FENCE);
    output.push_str(&format!(
        "Overall recommendation: {}\n",
        composite.recommendation
    ));
    output.push_str(&format!(
        "  Bullish: {:.0}% | Bearish: {:.0}%\n\n",
        composite.bullish_percent, composite.bearish_percent
    ));
    for (kind, result) in composite.signals.iter() {
        output.push_str(&format!(
            "{}: {} (strength {:.1}/10)\n",
            kind, result.text, result.strength
        ));
    }
    output.push_str(FENCE);
    output
}

fn render_indicator_values(snapshot: &IndicatorSnapshot) -> String {
    let price = snapshot.current_price;
    let mut output = String::new();
    output.push_str(&format!("Symbol: {}\n", snapshot.label()));
    output.push_str(&format!("Current price: ${:.2}\n", price));
    if let Some(date) = snapshot.as_of {
        output.push_str(&format!("As of: {}\n", date));
    }

    output.push_str("\nTechnical indicators:\n");
    match snapshot.rsi {
        Some(rsi) => output.push_str(&format!("- RSI: {:.2}\n", rsi)),
        None => output.push_str("- RSI: n/a\n"),
    }
    if let Some(ma50) = snapshot.ma50 {
        output.push_str(&format!(
            "- MA50: ${:.2} (price {})\n",
            ma50,
            above_below(price, ma50)
        ));
    }
    if let Some(ma200) = snapshot.ma200 {
        output.push_str(&format!(
            "- MA200: ${:.2} (price {})\n",
            ma200,
            above_below(price, ma200)
        ));
    }

    if let Some(macd) = &snapshot.macd {
        output.push_str("\nMACD values:\n");
        output.push_str(&format!("- MACD: {:.2}\n", macd.macd));
        output.push_str(&format!("- Signal: {:.2}\n", macd.signal));
        output.push_str(&format!("- Histogram: {:.2}\n", macd.histogram));
    }

    if let Some(bands) = &snapshot.bollinger {
        output.push_str("\nBollinger bands:\n");
        output.push_str(&format!("- Upper: ${:.2}\n", bands.upper));
        output.push_str(&format!("- Middle: ${:.2}\n", bands.middle));
        output.push_str(&format!("- Lower: ${:.2}\n", bands.lower));
    }
    output
}

impl ReportPort for PromptReportAdapter {
    fn render_signal(&self, snapshot: &IndicatorSnapshot, composite: &CompositeSignal) -> String {
        let mut output = render_analysis_block(composite);
        output.push('\n');
        output.push_str(&render_indicator_values(snapshot));
        output
    }

    fn render_portfolio(&self, report: &PortfolioReport<'_>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Portfolio: {} holdings, total value ${:.2}, P&L {:.2}%\n",
            report.holdings.len(),
            report.stats.total_value,
            report.stats.total_pnl_percent
        ));
        output.push_str(&format!("Summary: {}\n", report.summary.suggestion));

        for advice in report.advice {
            output.push('\n');
            output.push_str(&format!(
                "{}: {} (confidence {:.0}%)\n",
                advice.symbol, advice.action, advice.confidence
            ));
            if let Some(h) = find_holding(report.holdings, &advice.symbol) {
                output.push_str(&format!(
                    "Position: {} @ ${:.2}, now ${:.2} ({:.2}%)\n",
                    h.quantity,
                    h.buy_price,
                    h.current_price,
                    h.pnl_percent()
                ));
            }
            output.push_str(&format!(
                "Stop loss ${:.2} | Add more ${:.2} | Target ${:.2}\n",
                advice.stop_loss, advice.add_more_price, advice.target_price
            ));
            if !advice.reasoning.is_empty() {
                output.push_str(&format!("Reasoning: {}\n", advice.reasoning));
            }
            if let Some(composite) = &advice.technical_signals {
                output.push_str(&render_analysis_block(composite));
            }
        }
        output
    }
}
