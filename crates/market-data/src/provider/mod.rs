//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Provider rate limiting configuration
//! - Concrete provider implementations (Yahoo)
//!
//! # Provider Resolution
//!
//! Providers receive pre-resolved `ProviderInstrument` parameters. The mapping
//! from a caller's `SymbolRequest` to provider-specific symbols happens in the
//! resolver module, not in the providers themselves.

mod rate_limit;
mod traits;

pub mod yahoo;

// Re-exports
pub use rate_limit::RateLimit;
pub use traits::MarketDataProvider;
