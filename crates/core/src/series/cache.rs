//! TTL cache for provider history.
//!
//! Keyed by `(provider symbol, start, end)`. Entries are shared as
//! `Arc<Vec<Quote>>` so a hit never copies the bars. The lock is never held
//! across a provider call.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tokio::time::Instant;

use metalpulse_market_data::Quote;

type CacheKey = (String, NaiveDate, NaiveDate);

struct CacheEntry {
    quotes: Arc<Vec<Quote>>,
    inserted_at: Instant,
}

pub struct SeriesCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl SeriesCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<Arc<Vec<Quote>>> {
        let entries = self.entries.read().await;
        entries
            .get(&(symbol.to_string(), start, end))
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| entry.quotes.clone())
    }

    /// Store `quotes`, sweeping expired entries first.
    pub async fn insert(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        quotes: Arc<Vec<Quote>>,
    ) {
        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        entries.insert(
            (symbol.to_string(), start, end),
            CacheEntry {
                quotes,
                inserted_at: Instant::now(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn range() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
        )
    }

    fn quotes() -> Arc<Vec<Quote>> {
        let (start, _) = range();
        Arc::new(vec![Quote::new(start, dec!(1))])
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl() {
        let cache = SeriesCache::new(Duration::from_secs(60));
        let (start, end) = range();
        cache.insert("HG=F", start, end, quotes()).await;

        tokio::time::advance(Duration::from_secs(30)).await;
        assert!(cache.get("HG=F", start, end).await.is_some());
        assert!(cache.get("GC=F", start, end).await.is_none());
        assert!(cache.get("HG=F", start, start).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_misses_and_is_swept() {
        let cache = SeriesCache::new(Duration::from_secs(60));
        let (start, end) = range();
        cache.insert("HG=F", start, end, quotes()).await;

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(cache.get("HG=F", start, end).await.is_none());

        cache.insert("GC=F", start, end, quotes()).await;
        assert_eq!(cache.len().await, 1);
    }
}
