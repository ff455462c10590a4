#![allow(dead_code)]

use sigscore::adapters::csv_adapter::write_advice;
use sigscore::domain::advice::{HoldingAction, HoldingAdvice};
use sigscore::domain::error::SigscoreError;
use sigscore::domain::holding::Holding;
use sigscore::domain::snapshot::{BollingerBands, IndicatorSnapshot, MacdValues};
use sigscore::ports::portfolio_port::PortfolioPort;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

pub struct MockPortfolioPort {
    pub holdings: Vec<Holding>,
    pub advice: Vec<HoldingAdvice>,
    pub snapshots: HashMap<String, IndicatorSnapshot>,
    pub snapshot_errors: HashMap<String, String>,
    pub saved: RefCell<Option<Vec<HoldingAdvice>>>,
}

impl MockPortfolioPort {
    pub fn new() -> Self {
        Self {
            holdings: Vec::new(),
            advice: Vec::new(),
            snapshots: HashMap::new(),
            snapshot_errors: HashMap::new(),
            saved: RefCell::new(None),
        }
    }

    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    pub fn with_advice(mut self, advice: HoldingAdvice) -> Self {
        self.advice.push(advice);
        self
    }

    pub fn with_snapshot(mut self, symbol: &str, snapshot: IndicatorSnapshot) -> Self {
        self.snapshots.insert(symbol.to_string(), snapshot);
        self
    }

    pub fn with_snapshot_error(mut self, symbol: &str, reason: &str) -> Self {
        self.snapshot_errors
            .insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl PortfolioPort for MockPortfolioPort {
    fn load_holdings(&self) -> Result<Vec<Holding>, SigscoreError> {
        Ok(self.holdings.clone())
    }

    fn load_advice(&self) -> Result<Vec<HoldingAdvice>, SigscoreError> {
        Ok(self.advice.clone())
    }

    fn load_snapshot(&self, symbol: &str) -> Result<Option<IndicatorSnapshot>, SigscoreError> {
        if let Some(reason) = self.snapshot_errors.get(symbol) {
            return Err(SigscoreError::ConfigParse {
                file: format!("{}.ini", symbol),
                reason: reason.clone(),
            });
        }
        Ok(self.snapshots.get(symbol).cloned())
    }

    fn save_advice(
        &self,
        advice: &[HoldingAdvice],
        out: &mut dyn Write,
    ) -> Result<(), SigscoreError> {
        *self.saved.borrow_mut() = Some(advice.to_vec());
        write_advice(advice, out)
    }
}

pub fn advice(symbol: &str, action: HoldingAction, confidence: f64) -> HoldingAdvice {
    HoldingAdvice::new(symbol, action, confidence)
}

pub fn advice_with_prices(
    symbol: &str,
    action: HoldingAction,
    confidence: f64,
    stop_loss: f64,
    add_more_price: f64,
    target_price: f64,
) -> HoldingAdvice {
    let mut a = HoldingAdvice::new(symbol, action, confidence);
    a.stop_loss = stop_loss;
    a.add_more_price = add_more_price;
    a.target_price = target_price;
    a
}

/// Every indicator pointing up.
pub fn bullish_snapshot(symbol: &str, price: f64) -> IndicatorSnapshot {
    IndicatorSnapshot::new(price)
        .with_symbol(symbol)
        .with_rsi(25.0)
        .with_moving_averages(price * 0.95, price * 0.90)
        .with_macd(MacdValues::new(3.0, 1.0, 2.0))
        .with_bollinger(BollingerBands::new(price * 1.2, price * 1.1, price * 1.05))
}

/// Every indicator pointing down.
pub fn bearish_snapshot(symbol: &str, price: f64) -> IndicatorSnapshot {
    IndicatorSnapshot::new(price)
        .with_symbol(symbol)
        .with_rsi(80.0)
        .with_moving_averages(price * 1.05, price * 1.10)
        .with_macd(MacdValues::new(-3.0, -1.0, -2.0))
        .with_bollinger(BollingerBands::new(price * 0.95, price * 0.90, price * 0.85))
}

pub const HOLDINGS_CSV: &str = "symbol,quantity,buy_price,current_price\n\
AAPL,10,150.0,100.0\n\
TSLA,5,200.0,250.0\n\
NVDA,2,400.0,500.0\n";

pub const ADVICE_CSV: &str =
    "symbol,action,confidence,stop_loss,add_more_price,target_price,reasoning\n\
AAPL,HOLD,60,90.0,95.0,120.0,range bound\n\
TSLA,SELL,40,200.0,240.0,300.0,momentum fading\n\
NVDA,BUY_MORE,90,400.0,450.0,600.0,strong trend\n";

pub const AAPL_SNAPSHOT_INI: &str = r#"
[snapshot]
symbol = AAPL
current_price = 100
as_of = 2024-06-03

[rsi]
value = 25

[macd]
macd = 3.0
signal = 1.0

[bollinger]
upper = 120
middle = 110
lower = 105
"#;
