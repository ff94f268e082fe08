//! Symbol resolution for market data providers.
//!
//! Converts a caller's [`SymbolRequest`](crate::models::SymbolRequest) into
//! provider-specific parameters:
//!
//! - **Stocks**: free-form tickers, trimmed and upper-cased, with suffixes
//!   rewritten to the provider's convention (`7203.JP` -> `7203.T` on Yahoo)
//! - **Metals**: display names looked up in the [`METAL_CATALOG`]
//!
//! # Example
//!
//! ```
//! use metalpulse_market_data::models::SymbolRequest;
//! use metalpulse_market_data::resolver::{RulesResolver, SymbolResolver};
//!
//! let resolver = RulesResolver::new();
//! let copper = resolver.resolve("YAHOO", &SymbolRequest::metal("Copper")).unwrap();
//! assert_eq!(copper.symbol(), "HG=F");
//! ```

mod metal_catalog;
mod rules_resolver;
mod traits;

pub use metal_catalog::{
    dashboard_entries, metal_symbol, CatalogEntry, CatalogGroup, METAL_CATALOG,
};
pub use rules_resolver::RulesResolver;
pub use traits::SymbolResolver;
