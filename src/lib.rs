//! sigscore: explainable trading signals from precomputed indicators.
//!
//! Hexagonal architecture: scoring rules in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
