use std::time::Duration;

/// Lookback used by `/api/analyze` when the caller omits either date
pub const DEFAULT_ANALYSIS_LOOKBACK_DAYS: i64 = 730;

/// Lookback of the metals dashboard (three years)
pub const METALS_LOOKBACK_DAYS: i64 = 1095;

/// Per-symbol fetch timeout when none is configured
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Series cache TTL when none is configured
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(900);

/// Reported as `metal_ticker` when no metal was requested
pub const NO_METAL_TICKER: &str = "None";

/// Wire date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";
