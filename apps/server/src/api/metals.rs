use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use metalpulse_core::metals::MetalsOverview;

#[derive(serde::Deserialize)]
struct MetalsQuery {
    /// Trailing window in calendar months
    months: Option<u32>,
}

/// Daily candles for every metal and steel index.
async fn get_metals(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MetalsQuery>, QueryRejection>,
) -> ApiResult<Json<MetalsOverview>> {
    let Query(query) = query?;
    let today = chrono::Utc::now().date_naive();
    let overview = state.metals_service.overview(today, query.months).await;
    Ok(Json(overview))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metals", get(get_metals))
}
