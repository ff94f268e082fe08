//! MetalPulse Market Data Crate
//!
//! This crate fetches daily price history for stocks, metal futures and
//! steel indices, independent of the analysis that consumes it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |     Caller       | --> |  SymbolRequest   |  (ticker or metal name)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Resolver      |  (rules + metal catalog)
//!                          +------------------+
//!                                  |
//!                                  v
//!                         +-------------------+
//!                         | ProviderInstrument|  (provider-specific)
//!                         +-------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Yahoo)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Quote        |  (daily OHLCV bar)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SymbolRequest`] - What the caller asked for
//! - [`ProviderInstrument`] - Provider-specific lookup parameters
//! - [`Quote`] - One daily bar
//! - [`AssetProfile`] - Provider-sourced display names
//! - [`MarketDataError`] - Errors, classified by [`FailureClass`]

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::{FailureClass, MarketDataError};

pub use models::{
    AssetProfile, InstrumentKind, ProviderInstrument, ProviderSymbol, Quote, SymbolRequest,
};

pub use resolver::{
    dashboard_entries, metal_symbol, CatalogEntry, CatalogGroup, RulesResolver, SymbolResolver,
    METAL_CATALOG,
};

pub use provider::yahoo::YahooProvider;
pub use provider::{MarketDataProvider, RateLimit};
