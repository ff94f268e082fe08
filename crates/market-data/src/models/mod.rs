//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (ProviderSymbol)
//! - `instrument` - What the caller asked for (SymbolRequest) and its InstrumentKind
//! - `provider_params` - Provider-specific instrument parameters (ProviderInstrument)
//! - `quote` - Daily bar returned by providers (Quote)
//! - `profile` - Asset profile data (AssetProfile)

mod instrument;
mod profile;
mod provider_params;
mod quote;
mod types;

pub use instrument::{InstrumentKind, SymbolRequest};
pub use profile::AssetProfile;
pub use provider_params::ProviderInstrument;
pub use quote::Quote;
pub use types::ProviderSymbol;
