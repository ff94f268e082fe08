use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use log::{debug, info, warn};

use metalpulse_market_data::{ProviderInstrument, SymbolRequest};

use super::align::align;
use super::correlation::correlate;
use super::model::{
    AnalysisRequest, AnalysisResult, PairAnalysis, PairPoint, StockAnalysis, StockOutcome,
    StockPoint,
};
use crate::constants::NO_METAL_TICKER;
use crate::errors::{Result, ValidationError};
use crate::series::{SeriesStoreTrait, TimeSeries};

#[async_trait]
pub trait AnalysisServiceTrait: Send + Sync {
    /// Correlate every stock with the metal and with each other.
    ///
    /// Per-stock fetch failures are recorded on that stock; only an invalid
    /// request fails the whole call.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// First-wave result for one stock.
struct StockFetch {
    stock_id: String,
    stock_name: String,
    ticker: Option<String>,
    series: std::result::Result<TimeSeries, String>,
}

pub struct AnalysisService {
    store: Arc<dyn SeriesStoreTrait>,
}

impl AnalysisService {
    pub fn new(store: Arc<dyn SeriesStoreTrait>) -> Self {
        Self { store }
    }

    async fn fetch_stock(&self, stock_id: &str, start: NaiveDate, end: NaiveDate) -> StockFetch {
        let instrument = match self.store.resolve(&SymbolRequest::stock(stock_id)) {
            Ok(instrument) => instrument,
            Err(err) => {
                return StockFetch {
                    stock_id: stock_id.to_string(),
                    stock_name: stock_id.to_string(),
                    ticker: None,
                    series: Err(err.to_string()),
                }
            }
        };

        let (series, name) = futures::join!(
            self.store.fetch_series(&instrument, start, end),
            self.store.display_name(&instrument)
        );

        StockFetch {
            stock_id: stock_id.to_string(),
            stock_name: name.unwrap_or_else(|| stock_id.to_string()),
            ticker: Some(instrument.symbol().to_string()),
            series: series.map_err(|err| err.to_string()),
        }
    }

    async fn fetch_metal(
        &self,
        instrument: Option<&ProviderInstrument>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<std::result::Result<TimeSeries, String>> {
        let instrument = instrument?;
        Some(
            self.store
                .fetch_series(instrument, start, end)
                .await
                .map_err(|err| err.to_string()),
        )
    }
}

#[async_trait]
impl AnalysisServiceTrait for AnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let (start, end) = (request.start, request.end);

        let metal_instrument = match &request.metal {
            Some(name) => Some(
                self.store
                    .resolve(&SymbolRequest::metal(name.as_str()))
                    .map_err(|_| ValidationError::UnknownMetal(name.clone()))?,
            ),
            None => None,
        };
        let metal_ticker = metal_instrument
            .as_ref()
            .map(|i| i.symbol().to_string())
            .unwrap_or_else(|| NO_METAL_TICKER.to_string());

        info!(
            "Analyzing {} stock(s) against {} from {} to {}",
            request.stock_ids.len(),
            metal_ticker,
            start,
            end
        );

        // First wave: the metal alongside every stock, input order preserved
        let stocks = stream::iter(request.stock_ids.iter())
            .map(|id| self.fetch_stock(id, start, end))
            .buffered(self.store.max_concurrency().max(1))
            .collect::<Vec<_>>()
            .boxed();
        let (metal, fetches) =
            futures::join!(self.fetch_metal(metal_instrument.as_ref(), start, end), stocks);

        if let (Some(name), Some(Err(err))) = (&request.metal, &metal) {
            warn!("Metal {} unavailable: {}", name, err);
        }

        let stock_results: Vec<StockAnalysis> = fetches
            .iter()
            .map(|fetch| analyze_stock(fetch, request.metal.as_deref(), metal.as_ref()))
            .collect();

        // Second wave: only stocks that came out of the first wave without error
        let successful: Vec<(&str, &TimeSeries)> = fetches
            .iter()
            .zip(&stock_results)
            .filter(|(_, result)| result.is_ok())
            .filter_map(|(f, _)| f.series.as_ref().ok().map(|s| (f.stock_id.as_str(), s)))
            .collect();
        let pairs = analyze_pairs(&successful);

        debug!(
            "{} of {} stock(s) fetched, {} pair(s)",
            successful.len(),
            fetches.len(),
            pairs.len()
        );

        Ok(assemble(metal_ticker, stock_results, pairs))
    }
}

fn analyze_stock(
    fetch: &StockFetch,
    metal_name: Option<&str>,
    metal: Option<&std::result::Result<TimeSeries, String>>,
) -> StockAnalysis {
    let outcome = match (&fetch.series, metal) {
        (Err(message), _) => StockOutcome::Err {
            message: message.clone(),
        },
        (Ok(series), None) => StockOutcome::Ok {
            series: series
                .iter()
                .map(|o| StockPoint {
                    date: o.date,
                    stock_price: o.price,
                    metal_price: None,
                })
                .collect(),
            correlation: None,
        },
        (Ok(series), Some(Ok(metal_series))) => {
            let aligned = align(series, metal_series);
            StockOutcome::Ok {
                correlation: correlate(&aligned),
                series: aligned
                    .iter()
                    .map(|p| StockPoint {
                        date: p.date,
                        stock_price: p.a,
                        metal_price: Some(p.b),
                    })
                    .collect(),
            }
        }
        (Ok(_), Some(Err(_))) => StockOutcome::Err {
            message: format!(
                "Could not fetch data for metal: {}",
                metal_name.unwrap_or_default()
            ),
        },
    };

    StockAnalysis {
        stock_id: fetch.stock_id.clone(),
        stock_name: fetch.stock_name.clone(),
        ticker: fetch.ticker.clone(),
        outcome,
    }
}

/// Every unordered pair `(i, j)`, `i < j`, in input order.
fn analyze_pairs(stocks: &[(&str, &TimeSeries)]) -> Vec<PairAnalysis> {
    let mut pairs = Vec::with_capacity(stocks.len() * stocks.len().saturating_sub(1) / 2);
    for (i, (id1, s1)) in stocks.iter().enumerate() {
        for (id2, s2) in &stocks[i + 1..] {
            let aligned = align(s1, s2);
            pairs.push(PairAnalysis {
                stock1: id1.to_string(),
                stock2: id2.to_string(),
                correlation: correlate(&aligned),
                data: aligned
                    .iter()
                    .map(|p| PairPoint {
                        date: p.date,
                        price1: p.a,
                        price2: p.b,
                    })
                    .collect(),
            });
        }
    }
    pairs
}

/// Package per-stock and pairwise results into the response model.
pub fn assemble(
    metal_ticker: String,
    stock_results: Vec<StockAnalysis>,
    stock_vs_stock: Vec<PairAnalysis>,
) -> AnalysisResult {
    AnalysisResult {
        metal_ticker,
        stock_results,
        stock_vs_stock,
    }
}
