/// Classification of a failed fetch.
///
/// Every failure ends up as a per-symbol error string in the analysis
/// result, but the class is kept for logs so an upstream outage can be told
/// apart from a symbol that simply has no data.
///
/// # Behavior Summary
///
/// | Class | Upstream reachable? | Typical cause |
/// |-------|---------------------|---------------|
/// | `Transport` | No / unreliable | network error, non-2xx, timeout, rate limit |
/// | `NoData` | Yes | unknown symbol, empty range |
/// | `Rejected` | n/a | symbol could not be resolved or data failed validation |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The provider could not be reached or answered with an error status.
    Transport,

    /// The provider answered, but there was nothing to return.
    NoData,

    /// The request never reached the provider, or its answer was unusable.
    Rejected,
}

impl FailureClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::NoData => "no_data",
            Self::Rejected => "rejected",
        }
    }
}
