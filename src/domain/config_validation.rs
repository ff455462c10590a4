//! Configuration validation.
//!
//! Validates the portfolio run config before any input file is opened.

use crate::domain::error::SigscoreError;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportFormat;

pub fn validate_portfolio_config(config: &dyn ConfigPort) -> Result<(), SigscoreError> {
    validate_required_path(config, "portfolio", "holdings")?;
    validate_required_path(config, "portfolio", "advice")?;
    validate_report_format(config)?;
    validate_show_detail(config)?;
    Ok(())
}

fn validate_required_path(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), SigscoreError> {
    match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(SigscoreError::missing(section, key)),
    }
}

fn validate_report_format(config: &dyn ConfigPort) -> Result<(), SigscoreError> {
    match config.get_string("report", "format") {
        None => Ok(()),
        Some(s) => s
            .parse::<ReportFormat>()
            .map(|_| ())
            .map_err(|e| SigscoreError::invalid("report", "format", e)),
    }
}

fn validate_show_detail(config: &dyn ConfigPort) -> Result<(), SigscoreError> {
    match config.get_string("report", "show_detail") {
        None => Ok(()),
        Some(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "false" | "no" | "0" => Ok(()),
            _ => Err(SigscoreError::invalid(
                "report",
                "show_detail",
                "show_detail must be true or false",
            )),
        },
    }
}
