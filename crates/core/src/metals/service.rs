use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use log::{debug, warn};

use metalpulse_market_data::{dashboard_entries, CatalogEntry, ProviderInstrument};

use super::model::Candle;
use crate::constants::METALS_LOOKBACK_DAYS;
use crate::series::{trailing_months, SeriesStoreTrait};

/// Candles per catalog name, keyed by display name.
pub type MetalsOverview = BTreeMap<String, Vec<Candle>>;

#[async_trait]
pub trait MetalsServiceTrait: Send + Sync {
    /// Three years of daily candles for every metal and steel index.
    ///
    /// A name whose fetch fails maps to an empty list. With `months`, each
    /// list is cut to that trailing window.
    async fn overview(&self, today: NaiveDate, months: Option<u32>) -> MetalsOverview;
}

pub struct MetalsService {
    store: Arc<dyn SeriesStoreTrait>,
}

impl MetalsService {
    pub fn new(store: Arc<dyn SeriesStoreTrait>) -> Self {
        Self { store }
    }

    async fn candles_for(
        &self,
        entry: &CatalogEntry,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Candle> {
        let instrument = ProviderInstrument::MetalSymbol {
            symbol: Arc::from(entry.symbol),
        };

        let quotes = match self.store.fetch_quotes(&instrument, start, end).await {
            Ok(quotes) => quotes,
            Err(err) => {
                warn!("Error fetching {} ({}): {}", entry.name, entry.symbol, err);
                return Vec::new();
            }
        };

        let mut candles: Vec<Candle> = quotes
            .iter()
            .filter(|q| q.date >= start && q.date <= end)
            .filter_map(Candle::from_quote)
            .collect();
        candles.sort_by_key(|c| c.x);
        candles.dedup_by(|later, earlier| {
            if later.x == earlier.x {
                *earlier = *later;
                true
            } else {
                false
            }
        });

        let skipped = quotes.len().saturating_sub(candles.len());
        if skipped > 0 {
            debug!("{}: dropped {} incomplete or out-of-range bars", entry.name, skipped);
        }

        candles
    }
}

#[async_trait]
impl MetalsServiceTrait for MetalsService {
    async fn overview(&self, today: NaiveDate, months: Option<u32>) -> MetalsOverview {
        let start = today
            .checked_sub_days(Days::new(METALS_LOOKBACK_DAYS as u64))
            .unwrap_or(NaiveDate::MIN);

        let entries: Vec<&CatalogEntry> = dashboard_entries().collect();
        let fetched = stream::iter(entries)
            .map(|entry| async move { (entry.name, self.candles_for(entry, start, today).await) })
            .buffered(self.store.max_concurrency().max(1))
            .collect::<Vec<_>>()
            .boxed()
            .await;

        fetched
            .into_iter()
            .map(|(name, candles)| {
                let candles = match months {
                    Some(n) => trailing_months(&candles, today, n).to_vec(),
                    None => candles,
                };
                (name.to_string(), candles)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metalpulse_market_data::{
        MarketDataError, Quote, RulesResolver, SymbolRequest, SymbolResolver, METAL_CATALOG,
    };
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        quotes: Vec<Quote>,
        requested: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
    }

    #[async_trait]
    impl SeriesStoreTrait for MockStore {
        fn resolve(&self, request: &SymbolRequest) -> Result<ProviderInstrument, MarketDataError> {
            RulesResolver::new().resolve("YAHOO", request)
        }

        async fn fetch_quotes(
            &self,
            instrument: &ProviderInstrument,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Arc<Vec<Quote>>, MarketDataError> {
            self.requested
                .lock()
                .unwrap()
                .push((instrument.symbol().to_string(), start, end));
            if instrument.symbol() == "^DJUSST" {
                return Err(MarketDataError::Timeout {
                    provider: "YAHOO".into(),
                });
            }
            Ok(Arc::new(self.quotes.clone()))
        }

        async fn display_name(&self, _instrument: &ProviderInstrument) -> Option<String> {
            None
        }

        fn max_concurrency(&self) -> usize {
            4
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn bar(y: i32, m: u32, d: u32, open: Option<rust_decimal::Decimal>) -> Quote {
        let mut quote = Quote::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), dec!(2));
        quote.open = open;
        quote
    }

    fn store() -> MockStore {
        MockStore {
            quotes: vec![
                bar(2024, 6, 28, Some(dec!(1))),
                bar(2024, 1, 2, Some(dec!(1))),
                bar(2024, 6, 27, None),
            ],
            ..MockStore::default()
        }
    }

    #[tokio::test]
    async fn test_overview_covers_catalog_and_tolerates_failures() {
        let store = Arc::new(store());
        let service = MetalsService::new(store.clone());
        let overview = service.overview(today(), None).await;

        // CRU Index and HRC Futures share a symbol but keep separate names
        assert_eq!(overview.len(), METAL_CATALOG.len());
        assert!(overview["DJUSST"].is_empty());

        let copper = &overview["Copper"];
        assert_eq!(copper.len(), 2);
        assert!(copper[0].x < copper[1].x);

        let requested = store.requested.lock().unwrap();
        let (_, start, end) = &requested[0];
        assert_eq!((*end - *start).num_days(), 1095);
        assert_eq!(*end, today());
    }

    #[tokio::test]
    async fn test_overview_trailing_months() {
        let service = MetalsService::new(Arc::new(store()));
        let overview = service.overview(today(), Some(3)).await;

        let gold = &overview["Gold"];
        assert_eq!(gold.len(), 1);
        assert_eq!(gold[0].x, NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());
    }
}
