//! CLI definition and dispatch.

use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::prompt_report_adapter::PromptReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::analysis::analyze_portfolio;
use crate::domain::composite::score_snapshot;
use crate::domain::config_validation::validate_portfolio_config;
use crate::domain::error::{PriceOverrideError, SigscoreError};
use crate::domain::holding::find_holding;
use crate::domain::price_bound::{apply_price_override, offset_pct, PriceBound, PriceKind};
use crate::domain::snapshot::{load_snapshot, IndicatorSnapshot};
use crate::ports::config_port::ConfigPort;
use crate::ports::portfolio_port::PortfolioPort;
use crate::ports::report_port::{ReportFormat, ReportPort};

#[derive(Parser, Debug)]
#[command(
    name = "sigscore",
    about = "Explainable trading signals from precomputed indicators"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single indicator snapshot
    Score {
        #[arg(short, long)]
        snapshot: PathBuf,
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
        /// Hide per-indicator detail lines
        #[arg(long)]
        no_detail: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score every holding and print prioritized advice
    Portfolio {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the accepted interval for advice prices
    Bounds {
        #[arg(long)]
        price: f64,
        /// One of stop-loss, add-more-price, target-price (all when omitted)
        #[arg(long)]
        kind: Option<PriceKind>,
    },
    /// Override one advice price after checking its interval
    Override {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        kind: PriceKind,
        #[arg(long)]
        value: f64,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a portfolio configuration and its input files
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Score {
            snapshot,
            format,
            no_detail,
            output,
        } => run_score(&snapshot, format, !no_detail, output.as_deref()),
        Command::Portfolio { config, output } => run_portfolio(&config, output.as_deref()),
        Command::Bounds { price, kind } => run_bounds(price, kind),
        Command::Override {
            config,
            symbol,
            kind,
            value,
            output,
        } => run_override(&config, &symbol, kind, value, output.as_deref()),
        Command::Validate { config } => run_validate(&config),
    }
}

fn fail(err: &SigscoreError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, SigscoreError> {
    FileConfigAdapter::from_file(path).map_err(|e| SigscoreError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Settings for a portfolio run, with paths already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSettings {
    pub holdings: PathBuf,
    pub advice: PathBuf,
    pub snapshots: Option<PathBuf>,
    pub format: ReportFormat,
    pub show_detail: bool,
}

impl PortfolioSettings {
    pub fn adapter(&self) -> CsvAdapter {
        let adapter = CsvAdapter::new(self.holdings.clone(), self.advice.clone());
        match &self.snapshots {
            Some(dir) => adapter.with_snapshot_dir(dir.clone()),
            None => adapter,
        }
    }
}

fn resolve_path(base_dir: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value.trim());
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Validate a portfolio config and resolve relative paths against `base_dir`.
pub fn build_portfolio_settings(
    config: &dyn ConfigPort,
    base_dir: &Path,
) -> Result<PortfolioSettings, SigscoreError> {
    validate_portfolio_config(config)?;

    let holdings = config
        .get_string("portfolio", "holdings")
        .ok_or_else(|| SigscoreError::missing("portfolio", "holdings"))?;
    let advice = config
        .get_string("portfolio", "advice")
        .ok_or_else(|| SigscoreError::missing("portfolio", "advice"))?;
    let snapshots = config
        .get_string("portfolio", "snapshots")
        .filter(|s| !s.trim().is_empty())
        .map(|s| resolve_path(base_dir, &s));

    let format = match config.get_string("report", "format") {
        Some(s) => s
            .parse::<ReportFormat>()
            .map_err(|e: String| SigscoreError::invalid("report", "format", e))?,
        None => ReportFormat::default(),
    };

    Ok(PortfolioSettings {
        holdings: resolve_path(base_dir, &holdings),
        advice: resolve_path(base_dir, &advice),
        snapshots,
        format,
        show_detail: config.get_bool("report", "show_detail", true),
    })
}

fn load_settings(config_path: &Path) -> Result<PortfolioSettings, SigscoreError> {
    tracing::info!(path = %config_path.display(), "loading config");
    let config = load_config(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    build_portfolio_settings(&config, base_dir)
}

pub fn make_reporter(format: ReportFormat, show_detail: bool) -> Box<dyn ReportPort> {
    match format {
        ReportFormat::Text => Box::new(TextReportAdapter::new(show_detail)),
        ReportFormat::Prompt => Box::new(PromptReportAdapter::new()),
    }
}

/// Load a snapshot file; an unnamed snapshot takes its symbol from the file stem.
pub fn load_snapshot_file(path: &Path) -> Result<IndicatorSnapshot, SigscoreError> {
    tracing::info!(path = %path.display(), "loading snapshot");
    let config = load_config(path)?;
    let mut snapshot = load_snapshot(&config)?;
    if snapshot.symbol.is_none() {
        snapshot.symbol = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_uppercase);
    }
    Ok(snapshot)
}

fn run_score(
    snapshot_path: &Path,
    format: ReportFormat,
    show_detail: bool,
    output: Option<&Path>,
) -> ExitCode {
    let snapshot = match load_snapshot_file(snapshot_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let composite = score_snapshot(&snapshot);
    let reporter = make_reporter(format, show_detail);
    match reporter.write_signal(&snapshot, &composite, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn run_portfolio(config_path: &Path, output: Option<&Path>) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let analysis = match analyze_portfolio(&settings.adapter()) {
        Ok(a) => a,
        Err(e) => return fail(&e),
    };
    if !analysis.unscored.is_empty() {
        eprintln!(
            "warning: no snapshot for {}; advice shown without signals",
            analysis.unscored.join(", ")
        );
    }

    let reporter = make_reporter(settings.format, settings.show_detail);
    match reporter.write_portfolio(&analysis.report(), output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

pub fn format_bound(kind: PriceKind, current_price: f64, bound: &PriceBound) -> String {
    format!(
        "{:<15} {:.2} - {:.2} ({:+.1}% to {:+.1}%)",
        kind.as_str(),
        bound.min,
        bound.max,
        offset_pct(bound.min, current_price),
        offset_pct(bound.max, current_price)
    )
}

fn run_bounds(price: f64, kind: Option<PriceKind>) -> ExitCode {
    if !price.is_finite() || price <= 0.0 {
        eprintln!("error: price must be a positive number");
        return ExitCode::from(2);
    }

    let kinds: Vec<PriceKind> = match kind {
        Some(k) => vec![k],
        None => PriceKind::ALL.to_vec(),
    };
    let mut stdout = std::io::stdout().lock();
    for k in kinds {
        let bound = PriceBound::for_kind(price, k);
        if let Err(e) = writeln!(stdout, "{}", format_bound(k, price, &bound)) {
            return fail(&SigscoreError::from(e));
        }
    }
    ExitCode::SUCCESS
}

/// Apply an override to freshly loaded advice and write the updated advice CSV.
///
/// The current price comes from the holdings file. Nothing is written when the
/// override is rejected.
pub fn override_price(
    port: &dyn PortfolioPort,
    symbol: &str,
    kind: PriceKind,
    value: f64,
    out: &mut dyn Write,
) -> Result<PriceBound, SigscoreError> {
    let holdings = port.load_holdings()?;
    let mut advice = port.load_advice()?;
    let current_price = find_holding(&holdings, symbol)
        .map(|h| h.current_price)
        .ok_or_else(|| PriceOverrideError::UnknownSymbol(symbol.to_string()))?;

    let bound = apply_price_override(&mut advice, symbol, kind, current_price, value)?;
    port.save_advice(&advice, out)?;
    Ok(bound)
}

fn run_override(
    config_path: &Path,
    symbol: &str,
    kind: PriceKind,
    value: f64,
    output: Option<&Path>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    let adapter = settings.adapter();

    // buffer first so a rejected override never truncates the output file
    let mut buf: Vec<u8> = Vec::new();
    let result = override_price(&adapter, symbol, kind, value, &mut buf);
    if let Err(e) = result {
        return fail(&e);
    }

    let written = match output {
        Some(path) => File::create(path).and_then(|mut f| f.write_all(&buf)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&buf).and_then(|_| stdout.flush())
        }
    };
    match written {
        Ok(()) => {
            if let Some(path) = output {
                tracing::info!(path = %path.display(), "advice written");
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&SigscoreError::from(e)),
    }
}

fn run_validate(config_path: &Path) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    let adapter = settings.adapter();

    let holdings = match adapter.load_holdings() {
        Ok(h) => h,
        Err(e) => return fail(&e),
    };
    let advice = match adapter.load_advice() {
        Ok(a) => a,
        Err(e) => return fail(&e),
    };

    let mut with_snapshot = 0;
    for entry in &advice {
        match adapter.load_snapshot(&entry.symbol) {
            Ok(Some(_)) => with_snapshot += 1,
            Ok(None) => {}
            Err(e) => return fail(&e),
        }
    }

    eprintln!("Config OK: {}", config_path.display());
    eprintln!("  holdings:  {}", holdings.len());
    eprintln!("  advice:    {}", advice.len());
    eprintln!("  snapshots: {}/{}", with_snapshot, advice.len());
    ExitCode::SUCCESS
}
