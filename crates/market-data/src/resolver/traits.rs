//! Resolution traits for the market data crate.
//!
//! Defines the core abstraction for turning what a caller asked for into a
//! provider-specific symbol.

use crate::errors::MarketDataError;
use crate::models::SymbolRequest;

// Re-export ProviderInstrument for convenience
pub use crate::models::ProviderInstrument;

/// Main symbol resolver interface.
pub trait SymbolResolver: Send + Sync {
    /// Resolve a provider-specific instrument.
    ///
    /// # Arguments
    /// * `provider` - The provider ID to resolve for (e.g., "YAHOO")
    /// * `request` - The symbol as the caller spelled it
    ///
    /// # Returns
    /// * `Ok(instrument)` - Successfully resolved instrument
    /// * `Err(ResolutionFailed)` - Blank ticker or unknown metal name
    fn resolve(
        &self,
        provider: &str,
        request: &SymbolRequest,
    ) -> Result<ProviderInstrument, MarketDataError>;
}
