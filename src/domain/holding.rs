//! Portfolio holdings and aggregate statistics.

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
    pub buy_price: f64,
    pub current_price: f64,
}

impl Holding {
    pub fn new(symbol: &str, quantity: f64, buy_price: f64, current_price: f64) -> Self {
        Holding {
            symbol: symbol.to_string(),
            quantity,
            buy_price,
            current_price,
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.quantity * self.buy_price
    }

    pub fn current_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn pnl(&self) -> f64 {
        self.current_value() - self.total_cost()
    }

    /// P&L as a percentage of cost; 0 for a zero-cost position.
    pub fn pnl_percent(&self) -> f64 {
        let cost = self.total_cost();
        if cost == 0.0 {
            0.0
        } else {
            self.pnl() / cost * 100.0
        }
    }
}

pub fn find_holding<'a>(holdings: &'a [Holding], symbol: &str) -> Option<&'a Holding> {
    holdings
        .iter()
        .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_cost: f64,
    pub total_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub best_performer: Option<String>,
    pub worst_performer: Option<String>,
}

impl PortfolioStats {
    pub fn compute(holdings: &[Holding]) -> Self {
        let total_cost: f64 = holdings.iter().map(Holding::total_cost).sum();
        let total_value: f64 = holdings.iter().map(Holding::current_value).sum();
        let total_pnl = total_value - total_cost;
        let total_pnl_percent = if total_cost > 0.0 {
            total_pnl / total_cost * 100.0
        } else {
            0.0
        };

        // first holding wins ties in both directions
        let mut best: Option<&Holding> = None;
        let mut worst: Option<&Holding> = None;
        for h in holdings {
            if best.is_none_or(|b| h.pnl_percent() > b.pnl_percent()) {
                best = Some(h);
            }
            if worst.is_none_or(|w| h.pnl_percent() < w.pnl_percent()) {
                worst = Some(h);
            }
        }

        PortfolioStats {
            total_cost,
            total_value,
            total_pnl,
            total_pnl_percent,
            best_performer: best.map(|h| h.symbol.clone()),
            worst_performer: worst.map(|h| h.symbol.clone()),
        }
    }
}
