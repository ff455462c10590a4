//! Domain error types.

use crate::domain::price_bound::PriceKind;

/// Rejection of a user-submitted price override. The advice record is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceOverrideError {
    #[error("{kind} {value:.2} is outside the accepted range {min:.2} - {max:.2}")]
    OutOfRange {
        kind: PriceKind,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no advice for symbol {0}")]
    UnknownSymbol(String),

    #[error("{kind} must be a finite number")]
    NotFinite { kind: PriceKind },
}

/// Top-level error type for sigscore.
#[derive(Debug, thiserror::Error)]
pub enum SigscoreError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error in {file}: {reason}")]
    DataParse { file: String, reason: String },

    #[error(transparent)]
    PriceOverride(#[from] PriceOverrideError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SigscoreError {
    pub(crate) fn missing(section: &str, key: &str) -> Self {
        SigscoreError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        SigscoreError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            SigscoreError::Io(_) => 1,
            SigscoreError::ConfigParse { .. }
            | SigscoreError::ConfigMissing { .. }
            | SigscoreError::ConfigInvalid { .. } => 2,
            SigscoreError::DataParse { .. } => 3,
            SigscoreError::PriceOverride(_) => 4,
        }
    }
}

impl From<&SigscoreError> for std::process::ExitCode {
    fn from(err: &SigscoreError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
