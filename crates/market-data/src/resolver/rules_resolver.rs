//! Rules resolver - deterministic ticker and catalog resolution.
//!
//! Stock tickers are normalized (trimmed, upper-cased) and rewritten to the
//! provider's suffix convention; metal names are looked up in the catalog.

use std::sync::Arc;

use crate::errors::MarketDataError;
use crate::models::{InstrumentKind, ProviderInstrument, SymbolRequest};

use super::metal_catalog::metal_symbol;
use super::traits::SymbolResolver;

/// Suffix rewrites for Yahoo: (user-facing suffix, Yahoo suffix).
///
/// Taiwan listings (`.TW`, `.TWO`) already use Yahoo's suffix and pass
/// through unchanged, as does anything not listed here.
const YAHOO_SUFFIX_REWRITES: &[(&str, &str)] = &[(".JP", ".T")];

/// Resolves provider instruments from deterministic rules.
#[derive(Clone, Debug, Default)]
pub struct RulesResolver;

impl RulesResolver {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a user-entered ticker for a provider.
    pub fn stock_symbol(&self, provider: &str, id: &str) -> Option<String> {
        let ticker = id.trim().to_uppercase();
        if ticker.is_empty() {
            return None;
        }

        if provider == "YAHOO" {
            for (from, to) in YAHOO_SUFFIX_REWRITES {
                if let Some(base) = ticker.strip_suffix(from) {
                    return Some(format!("{}{}", base, to));
                }
            }
        }

        Some(ticker)
    }
}

impl SymbolResolver for RulesResolver {
    fn resolve(
        &self,
        provider: &str,
        request: &SymbolRequest,
    ) -> Result<ProviderInstrument, MarketDataError> {
        match request.kind {
            InstrumentKind::Stock => self
                .stock_symbol(provider, &request.id)
                .map(|symbol| ProviderInstrument::EquitySymbol {
                    symbol: Arc::from(symbol),
                })
                .ok_or_else(|| MarketDataError::ResolutionFailed(request.id.clone())),
            InstrumentKind::Metal => metal_symbol(request.id.trim())
                .map(|symbol| ProviderInstrument::MetalSymbol {
                    symbol: Arc::from(symbol),
                })
                .ok_or_else(|| MarketDataError::ResolutionFailed(request.id.clone())),
        }
    }
}
