//! Series Store - facade between the analysis core and the market-data crate.
//!
//! # Architecture
//!
//! ```text
//! SymbolRequest ─▶ SymbolResolver ─▶ ProviderInstrument
//!                                           │
//!                                           ▼
//!                 SeriesCache ◀──▶ MarketDataProvider (under timeout)
//!                                           │
//!                                           ▼
//!                               Vec<Quote> ─▶ TimeSeries
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};

use metalpulse_market_data::{
    FailureClass, MarketDataError, MarketDataProvider, ProviderInstrument, Quote, SymbolRequest,
    SymbolResolver,
};

use super::cache::SeriesCache;
use super::model::TimeSeries;
use crate::constants::DATE_FORMAT;

/// Source of daily history for the analysis services.
#[async_trait]
pub trait SeriesStoreTrait: Send + Sync {
    /// Map a caller's symbol to the provider's.
    fn resolve(&self, request: &SymbolRequest) -> Result<ProviderInstrument, MarketDataError>;

    /// Raw daily bars for `[start, end]`.
    async fn fetch_quotes(
        &self,
        instrument: &ProviderInstrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Arc<Vec<Quote>>, MarketDataError>;

    /// Closing prices for `[start, end]`; an empty result is `NoDataForRange`.
    async fn fetch_series(
        &self,
        instrument: &ProviderInstrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, MarketDataError> {
        let quotes = self.fetch_quotes(instrument, start, end).await?;
        let series = TimeSeries::from_quotes(&quotes, start, end);
        if series.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }
        Ok(series)
    }

    /// Human-readable name, if the provider has one.
    async fn display_name(&self, instrument: &ProviderInstrument) -> Option<String>;

    /// Upper bound on concurrent fetches callers should issue.
    fn max_concurrency(&self) -> usize;
}

/// [`SeriesStoreTrait`] backed by a market data provider.
pub struct SeriesStore {
    provider: Arc<dyn MarketDataProvider>,
    resolver: Arc<dyn SymbolResolver>,
    fetch_timeout: Duration,
    cache: Option<SeriesCache>,
}

impl SeriesStore {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        resolver: Arc<dyn SymbolResolver>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            resolver,
            fetch_timeout,
            cache: None,
        }
    }

    /// Enable the history cache. A zero TTL leaves it disabled.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = (!ttl.is_zero()).then(|| SeriesCache::new(ttl));
        self
    }

    async fn fetch_from_provider(
        &self,
        instrument: &ProviderInstrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Quote>, MarketDataError> {
        let fetch = self.provider.get_historical_quotes(instrument, start, end);
        match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(MarketDataError::Timeout {
                provider: self.provider.id().to_string(),
            }),
        }
    }

    fn log_failure(&self, symbol: &str, start: NaiveDate, end: NaiveDate, err: &MarketDataError) {
        let (start, end) = (start.format(DATE_FORMAT), end.format(DATE_FORMAT));
        match err.failure_class() {
            FailureClass::Transport => warn!(
                "Transport failure fetching {} ({} to {}) from {}: {}",
                symbol,
                start,
                end,
                self.provider.id(),
                err
            ),
            FailureClass::NoData => {
                info!("No data for {} between {} and {}: {}", symbol, start, end, err)
            }
            FailureClass::Rejected => {
                warn!("Request for {} rejected by {}: {}", symbol, self.provider.id(), err)
            }
        }
    }
}

#[async_trait]
impl SeriesStoreTrait for SeriesStore {
    fn resolve(&self, request: &SymbolRequest) -> Result<ProviderInstrument, MarketDataError> {
        self.resolver.resolve(self.provider.id(), request)
    }

    async fn fetch_quotes(
        &self,
        instrument: &ProviderInstrument,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Arc<Vec<Quote>>, MarketDataError> {
        let symbol = instrument.symbol();

        if let Some(cache) = &self.cache {
            if let Some(quotes) = cache.get(symbol, start, end).await {
                debug!("Cache hit for {} ({} bars)", symbol, quotes.len());
                return Ok(quotes);
            }
        }

        let quotes = match self.fetch_from_provider(instrument, start, end).await {
            Ok(quotes) => Arc::new(quotes),
            Err(err) => {
                self.log_failure(symbol, start, end, &err);
                return Err(err);
            }
        };

        debug!(
            "Fetched {} bars for {} from {}",
            quotes.len(),
            symbol,
            self.provider.id()
        );

        if let Some(cache) = &self.cache {
            cache.insert(symbol, start, end, quotes.clone()).await;
        }

        Ok(quotes)
    }

    async fn display_name(&self, instrument: &ProviderInstrument) -> Option<String> {
        let symbol = instrument.symbol();
        let lookup = self.provider.get_profile(symbol);
        match tokio::time::timeout(self.fetch_timeout, lookup).await {
            Ok(Ok(profile)) => profile.display_name().map(str::to_string),
            Ok(Err(err)) => {
                debug!("No profile for {}: {}", symbol, err);
                None
            }
            Err(_) => {
                debug!("Profile lookup for {} timed out", symbol);
                None
            }
        }
    }

    fn max_concurrency(&self) -> usize {
        self.provider.rate_limit().max_concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metalpulse_market_data::{AssetProfile, RateLimit, RulesResolver};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        delay: Option<Duration>,
        empty: bool,
    }

    #[async_trait]
    impl MarketDataProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "YAHOO"
        }

        fn rate_limit(&self) -> RateLimit {
            RateLimit { max_concurrency: 3 }
        }

        async fn get_historical_quotes(
            &self,
            _instrument: &ProviderInstrument,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Quote>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.empty {
                return Ok(Vec::new());
            }
            // One bar before the range to check the filter
            Ok(vec![
                Quote::new(start.pred_opt().unwrap(), dec!(9)),
                Quote::new(start, dec!(10)),
            ])
        }

        async fn get_profile(&self, symbol: &str) -> Result<AssetProfile, MarketDataError> {
            if symbol == "NIKL" {
                Ok(AssetProfile {
                    short_name: Some("Nickel Industries".into()),
                    ..AssetProfile::default()
                })
            } else {
                Err(MarketDataError::SymbolNotFound(symbol.to_string()))
            }
        }
    }

    fn store(provider: CountingProvider) -> (Arc<CountingProvider>, SeriesStore) {
        let provider = Arc::new(provider);
        let store = SeriesStore::new(
            provider.clone(),
            Arc::new(RulesResolver::new()),
            Duration::from_secs(5),
        );
        (provider, store)
    }

    #[tokio::test]
    async fn test_resolves_with_provider_id() {
        let (_, store) = store(CountingProvider::default());
        let instrument = store.resolve(&SymbolRequest::stock("7203.jp")).unwrap();
        assert_eq!(instrument.symbol(), "7203.T");
    }

    #[tokio::test]
    async fn test_fetch_series_filters_to_range() {
        let (_, store) = store(CountingProvider::default());
        let instrument = store.resolve(&SymbolRequest::stock("NIKL")).unwrap();
        let series = store.fetch_series(&instrument, d(3), d(7)).await.unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.first_date(), Some(d(3)));
    }

    #[tokio::test]
    async fn test_empty_history_is_no_data() {
        let (_, store) = store(CountingProvider {
            empty: true,
            ..CountingProvider::default()
        });
        let instrument = store.resolve(&SymbolRequest::stock("NIKL")).unwrap();
        let result = store.fetch_series(&instrument, d(3), d(7)).await;
        assert!(matches!(result, Err(MarketDataError::NoDataForRange)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out() {
        let (_, store) = store(CountingProvider {
            delay: Some(Duration::from_secs(30)),
            ..CountingProvider::default()
        });
        let instrument = store.resolve(&SymbolRequest::stock("NIKL")).unwrap();
        let result = store.fetch_quotes(&instrument, d(3), d(7)).await;
        assert!(matches!(result, Err(MarketDataError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_cache_skips_second_provider_call() {
        let provider = Arc::new(CountingProvider::default());
        let store = SeriesStore::new(
            provider.clone(),
            Arc::new(RulesResolver::new()),
            Duration::from_secs(5),
        )
        .with_cache_ttl(Duration::from_secs(60));
        let instrument = store.resolve(&SymbolRequest::metal("Copper")).unwrap();

        store.fetch_quotes(&instrument, d(3), d(7)).await.unwrap();
        store.fetch_quotes(&instrument, d(3), d(7)).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        store.fetch_quotes(&instrument, d(4), d(7)).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let (provider, store) = store(CountingProvider::default());
        let store = store.with_cache_ttl(Duration::ZERO);
        let instrument = store.resolve(&SymbolRequest::metal("Gold")).unwrap();

        store.fetch_quotes(&instrument, d(3), d(7)).await.unwrap();
        store.fetch_quotes(&instrument, d(3), d(7)).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_display_name_falls_back_to_none() {
        let (_, store) = store(CountingProvider::default());
        let nikl = store.resolve(&SymbolRequest::stock("nikl")).unwrap();
        let other = store.resolve(&SymbolRequest::stock("ZZZZ")).unwrap();

        assert_eq!(
            store.display_name(&nikl).await.as_deref(),
            Some("Nickel Industries")
        );
        assert_eq!(store.display_name(&other).await, None);
        assert_eq!(store.max_concurrency(), 3);
    }
}
