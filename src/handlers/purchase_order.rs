use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    models::order::PurchaseOrder,
    services::order_stats::{AGGREGATION_LIMIT, RECENT_ORDERS_LIMIT},
};

#[derive(Debug, Deserialize)]
pub struct RecentOrdersQuery {
    pub limit: Option<u64>,
}

/// Handler for GET /api/purchase-orders
///
/// Most recent purchase orders (latest first), served through the
/// primary-then-fallback loader the dashboard relies on.
pub async fn list_purchase_orders(
    State(state): State<AppState>,
    Query(query): Query<RecentOrdersQuery>,
) -> Json<Vec<PurchaseOrder>> {
    let limit = query
        .limit
        .unwrap_or(RECENT_ORDERS_LIMIT)
        .clamp(1, AGGREGATION_LIMIT);

    Json(state.order_stats.load_orders(limit).await)
}
