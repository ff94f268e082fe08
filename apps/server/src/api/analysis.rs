use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use metalpulse_core::analysis::{AnalysisRequest, AnalysisRequestInput, AnalysisResult};

/// Correlate stocks against a metal and each other.
async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalysisRequestInput>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(input) = body?;
    let today = chrono::Utc::now().date_naive();
    let request = AnalysisRequest::from_input(input, today)?;
    let result = state.analysis_service.analyze(&request).await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}
