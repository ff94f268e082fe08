use serde::{Deserialize, Serialize};

/// Asset profile data from market data providers
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetProfile {
    /// Provider that supplied this profile (e.g., "YAHOO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Short display name, e.g. "Nickel Industries"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Full legal name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Quote type as reported by the provider (EQUITY, FUTURE, ETF, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<String>,
}

impl AssetProfile {
    /// Preferred display name: short name, then long name.
    pub fn display_name(&self) -> Option<&str> {
        fn non_blank(name: &Option<String>) -> Option<&str> {
            name.as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
        }
        non_blank(&self.short_name).or_else(|| non_blank(&self.long_name))
    }
}
