//! Core domain types and scoring rules.

pub mod snapshot;
pub mod signal;
pub mod evaluator;
pub mod composite;
pub mod advice;
pub mod summary;
pub mod holding;
pub mod price_bound;
pub mod analysis;
pub mod config_validation;
pub mod error;
