use serde::{Deserialize, Serialize};

use super::types::ProviderSymbol;

/// Provider-specific instrument parameters.
/// Produced by resolver, consumed by providers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderInstrument {
    /// Equity with provider-specific suffix (Yahoo: "1605.TW", "7203.T")
    EquitySymbol { symbol: ProviderSymbol },

    /// Metal future, ETF proxy or index (Yahoo: "HG=F", "NICK.L", "^DJUSST")
    MetalSymbol { symbol: ProviderSymbol },
}

impl ProviderInstrument {
    /// The symbol string sent to the provider.
    pub fn symbol(&self) -> &str {
        match self {
            Self::EquitySymbol { symbol } | Self::MetalSymbol { symbol } => symbol,
        }
    }
}
