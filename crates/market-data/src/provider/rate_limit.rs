//! Provider rate limiting configuration.

/// How hard a provider may be driven.
///
/// Callers fanning out over many symbols use `max_concurrency` to bound the
/// number of in-flight requests.
#[derive(Clone, Debug)]
pub struct RateLimit {
    /// Maximum concurrent requests to this provider.
    pub max_concurrency: usize,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self { max_concurrency: 5 }
    }
}
