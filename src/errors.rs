//! Error types with rich diagnostics using miette
//!
//! This subsystem has no partial-failure mode: configuration is checked
//! before any output is produced, and a bad configuration fails the whole
//! diagram build synchronously.

use miette::Diagnostic;
use thiserror::Error;

/// Invalid diagram configuration, detected before emission starts.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("label budget is negative: {value}")]
    #[diagnostic(
        code(geolabel::config::negative_budget),
        help("the label-count modifier must be zero or positive")
    )]
    NegativeBudget { value: f64 },

    #[error("label budget is not a finite number: {value}")]
    #[diagnostic(code(geolabel::config::invalid_budget))]
    InvalidBudget { value: f64 },
}
