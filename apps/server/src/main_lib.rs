use std::sync::Arc;

use crate::config::Config;
use metalpulse_core::{
    analysis::{AnalysisService, AnalysisServiceTrait},
    metals::{MetalsService, MetalsServiceTrait},
    series::{SeriesStore, SeriesStoreTrait},
};
use metalpulse_market_data::{RulesResolver, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub analysis_service: Arc<dyn AnalysisServiceTrait + Send + Sync>,
    pub metals_service: Arc<dyn MetalsServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new()?);
    let store = SeriesStore::new(provider, Arc::new(RulesResolver::new()), config.fetch_timeout)
        .with_cache_ttl(config.cache_ttl);

    tracing::info!(
        "Series store ready (fetch timeout {:?}, cache ttl {:?})",
        config.fetch_timeout,
        config.cache_ttl
    );

    Ok(build_state_with(Arc::new(store)))
}

/// Wire the services over an arbitrary series store.
pub fn build_state_with(store: Arc<dyn SeriesStoreTrait>) -> Arc<AppState> {
    Arc::new(AppState {
        analysis_service: Arc::new(AnalysisService::new(store.clone())),
        metals_service: Arc::new(MetalsService::new(store)),
    })
}
