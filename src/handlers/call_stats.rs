use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{AppState, models::ErrorResponse, models::call_stats::CallStatsResponse};

/// Handler for GET /api/retellCallStats
///
/// Live today/yesterday call counts from Retell. The response carries
/// `Cache-Control: no-store`: the window moves with "now", so a cached body
/// misclassifies calls near IST midnight.
pub async fn get_retell_call_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let retell = state.retell.as_ref().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Missing RETELL_API_KEY environment variable".to_string(),
            }),
        )
    })?;

    let stats: CallStatsResponse = retell.fetch_call_stats().await.map_err(|e| {
        tracing::error!("Error fetching Retell call stats: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(stats)))
}
