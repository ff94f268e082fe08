use serde::{Deserialize, Serialize};

/// What kind of series a symbol refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    /// Exchange-traded equity, identified by a free-form ticker.
    Stock,
    /// Metal or steel/iron index, identified by its catalog display name.
    Metal,
}

/// Identifies what to fetch, as the caller spelled it.
///
/// The id is kept verbatim; provider-specific symbols are derived from it by
/// the resolver and never leak back into responses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRequest {
    pub id: String,
    pub kind: InstrumentKind,
}

impl SymbolRequest {
    pub fn stock(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: InstrumentKind::Stock,
        }
    }

    pub fn metal(name: impl Into<String>) -> Self {
        Self {
            id: name.into(),
            kind: InstrumentKind::Metal,
        }
    }
}
