//! MetalPulse Core - time series, correlation analysis and dashboard services.
//!
//! This crate contains the analysis logic behind the metals dashboard.
//! It is transport-agnostic: price history comes in through
//! [`series::SeriesStoreTrait`], and results are plain serde models that the
//! server crate serializes.

pub mod analysis;
pub mod constants;
pub mod errors;
pub mod metals;
pub mod series;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
