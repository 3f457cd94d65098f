use axum::{Json, extract::State};

use crate::{AppState, models::order::OrderStatsResponse};

/// Handler for GET /api/orderStats
///
/// Today/yesterday purchase-order counts over the IST window. Never errors:
/// the order loader degrades to an empty list, which reads as zero counts.
pub async fn get_order_stats(State(state): State<AppState>) -> Json<OrderStatsResponse> {
    Json(state.order_stats.fetch_order_stats().await)
}
