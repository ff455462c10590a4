//! CLI integration tests.
//!
//! Tests cover:
//! - Argument parsing for every subcommand
//! - Portfolio settings and relative path resolution
//! - Snapshot files on disk
//! - Full portfolio and override runs against real INI/CSV files

mod common;

use clap::Parser;
use common::*;
use sigscore::adapters::csv_adapter::parse_advice;
use sigscore::adapters::file_config_adapter::FileConfigAdapter;
use sigscore::cli::{self, Cli, Command};
use sigscore::domain::analysis::analyze_portfolio;
use sigscore::domain::composite::{score_snapshot, Recommendation};
use sigscore::domain::error::SigscoreError;
use sigscore::domain::price_bound::PriceKind;
use sigscore::ports::report_port::ReportFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PORTFOLIO_INI: &str = r#"
[portfolio]
holdings = holdings.csv
advice = advice.csv
snapshots = snapshots

[report]
format = text
show_detail = false
"#;

/// Lay out a portfolio workspace: config, both CSV files and one snapshot.
fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("portfolio.ini"), PORTFOLIO_INI).unwrap();
    fs::write(root.join("holdings.csv"), HOLDINGS_CSV).unwrap();
    fs::write(root.join("advice.csv"), ADVICE_CSV).unwrap();
    fs::create_dir(root.join("snapshots")).unwrap();
    fs::write(root.join("snapshots").join("AAPL.ini"), AAPL_SNAPSHOT_INI).unwrap();
    let config = root.join("portfolio.ini");
    (dir, config)
}

mod parsing {
    use super::*;

    #[test]
    fn score_defaults_to_text() {
        let cli = Cli::try_parse_from(["sigscore", "score", "--snapshot", "a.ini"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Score {
                snapshot,
                format,
                no_detail,
                output,
            } => {
                assert_eq!(snapshot, PathBuf::from("a.ini"));
                assert_eq!(format, ReportFormat::Text);
                assert!(!no_detail);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_flag_is_global_and_counted() {
        let cli =
            Cli::try_parse_from(["sigscore", "score", "-s", "a.ini", "-f", "prompt", "-vv"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Score {
                format: ReportFormat::Prompt,
                ..
            }
        ));
    }

    #[test]
    fn bounds_kind_accepts_kebab_case() {
        let cli = Cli::try_parse_from([
            "sigscore",
            "bounds",
            "--price",
            "100",
            "--kind",
            "add-more-price",
        ])
        .unwrap();
        match cli.command {
            Command::Bounds { price, kind } => {
                assert_eq!(price, 100.0);
                assert_eq!(kind, Some(PriceKind::AddMorePrice));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn override_requires_all_arguments() {
        assert!(Cli::try_parse_from(["sigscore", "override", "-c", "p.ini"]).is_err());
        let cli = Cli::try_parse_from([
            "sigscore", "override", "-c", "p.ini", "--symbol", "AAPL", "--kind", "stop_loss",
            "--value", "90",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Override {
                kind: PriceKind::StopLoss,
                ..
            }
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(
            Cli::try_parse_from(["sigscore", "score", "-s", "a.ini", "-f", "html"]).is_err()
        );
    }
}

mod settings {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let config = FileConfigAdapter::from_string(PORTFOLIO_INI).unwrap();
        let settings = cli::build_portfolio_settings(&config, Path::new("/data/run")).unwrap();

        assert_eq!(settings.holdings, PathBuf::from("/data/run/holdings.csv"));
        assert_eq!(settings.advice, PathBuf::from("/data/run/advice.csv"));
        assert_eq!(settings.snapshots, Some(PathBuf::from("/data/run/snapshots")));
        assert_eq!(settings.format, ReportFormat::Text);
        assert!(!settings.show_detail);
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = FileConfigAdapter::from_string(
            "[portfolio]\nholdings = /abs/h.csv\nadvice = a.csv\n",
        )
        .unwrap();
        let settings = cli::build_portfolio_settings(&config, Path::new("/base")).unwrap();
        assert_eq!(settings.holdings, PathBuf::from("/abs/h.csv"));
        assert_eq!(settings.snapshots, None);
        assert!(settings.show_detail);
    }

    #[test]
    fn missing_advice_is_config_error() {
        let config = FileConfigAdapter::from_string("[portfolio]\nholdings = h.csv\n").unwrap();
        let err = cli::build_portfolio_settings(&config, Path::new(".")).unwrap_err();
        assert!(matches!(err, SigscoreError::ConfigMissing { .. }));
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn missing_config_file_is_parse_error() {
        let err = cli::load_config(Path::new("/nonexistent/portfolio.ini")).unwrap_err();
        assert!(matches!(err, SigscoreError::ConfigParse { .. }));
    }
}

mod snapshot_files {
    use super::*;

    #[test]
    fn snapshot_file_scores_bullish() {
        let (dir, _) = workspace();
        let path = dir.path().join("snapshots").join("AAPL.ini");
        let snapshot = cli::load_snapshot_file(&path).unwrap();

        assert_eq!(snapshot.symbol.as_deref(), Some("AAPL"));
        assert_eq!(snapshot.macd.map(|m| m.histogram), Some(2.0));
        assert_eq!(score_snapshot(&snapshot).recommendation, Recommendation::Buy);
    }

    #[test]
    fn unnamed_snapshot_takes_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("msft.ini");
        fs::write(&path, "[snapshot]\ncurrent_price = 410\n").unwrap();
        let snapshot = cli::load_snapshot_file(&path).unwrap();
        assert_eq!(snapshot.symbol.as_deref(), Some("MSFT"));
    }

    #[test]
    fn invalid_snapshot_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.ini");
        fs::write(&path, "[snapshot]\ncurrent_price = -5\n").unwrap();
        let err = cli::load_snapshot_file(&path).unwrap_err();
        assert_eq!(err.exit_status(), 2);
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn portfolio_from_files() {
        let (_dir, config_path) = workspace();
        let config = cli::load_config(&config_path).unwrap();
        let settings =
            cli::build_portfolio_settings(&config, config_path.parent().unwrap()).unwrap();
        let analysis = analyze_portfolio(&settings.adapter()).unwrap();

        let symbols: Vec<&str> = analysis.advice.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["TSLA", "NVDA", "AAPL"]);
        assert_eq!(analysis.unscored, vec!["TSLA".to_string(), "NVDA".to_string()]);

        let aapl = &analysis.advice[2];
        assert_eq!(
            aapl.technical_signals.as_ref().map(|c| c.recommendation),
            Some(Recommendation::Buy)
        );

        let text = cli::make_reporter(settings.format, settings.show_detail)
            .render_portfolio(&analysis.report());
        assert!(text.contains("1. TSLA SELL"));
        assert!(text.contains("signals: BUY"));
    }

    #[test]
    fn portfolio_command_writes_report_file() {
        let (dir, config_path) = workspace();
        let out = dir.path().join("report.txt");
        let cli = Cli::try_parse_from([
            "sigscore",
            "portfolio",
            "-c",
            config_path.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let _ = cli::run(cli);

        let report = fs::read_to_string(&out).unwrap();
        assert!(report.contains("Summary"));
        assert!(report.contains("3. AAPL HOLD"));
    }

    #[test]
    fn score_command_writes_prompt_file() {
        let (dir, _) = workspace();
        let snapshot = dir.path().join("snapshots").join("AAPL.ini");
        let out = dir.path().join("prompt.txt");
        let cli = Cli::try_parse_from([
            "sigscore",
            "score",
            "-s",
            snapshot.to_str().unwrap(),
            "-f",
            "prompt",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let _ = cli::run(cli);

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("System signal analysis:"));
        assert!(text.contains("Overall recommendation: BUY"));
        assert!(text.contains("As of: 2024-06-03"));
    }

    #[test]
    fn override_command_writes_updated_advice() {
        let (dir, config_path) = workspace();
        let out = dir.path().join("advice_new.csv");
        let cli = Cli::try_parse_from([
            "sigscore",
            "override",
            "-c",
            config_path.to_str().unwrap(),
            "--symbol",
            "AAPL",
            "--kind",
            "stop-loss",
            "--value",
            "85",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let _ = cli::run(cli);

        let advice = parse_advice(fs::File::open(&out).unwrap(), "advice_new.csv").unwrap();
        assert_eq!(advice.len(), 3);
        assert_eq!(advice[0].symbol, "AAPL");
        assert_eq!(advice[0].stop_loss, 85.0);
        assert_eq!(advice[1].stop_loss, 200.0);
    }

    #[test]
    fn rejected_override_leaves_output_untouched() {
        let (dir, config_path) = workspace();
        let out = dir.path().join("advice_new.csv");
        let cli = Cli::try_parse_from([
            "sigscore",
            "override",
            "-c",
            config_path.to_str().unwrap(),
            "--symbol",
            "AAPL",
            "--kind",
            "stop-loss",
            "--value",
            "99",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let _ = cli::run(cli);

        assert!(!out.exists());
    }
}
