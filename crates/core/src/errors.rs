//! Core error types for the MetalPulse analysis engine.
//!
//! Per-symbol fetch failures never surface here: the orchestrator records
//! them on the affected stock. This type covers what aborts a request.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analysis engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Request validation failures. All map to a client error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing stock_ids")]
    MissingStockIds,

    #[error("Invalid {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("start_date {start} is after end_date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown metal: {0}")]
    UnknownMetal(String),
}
