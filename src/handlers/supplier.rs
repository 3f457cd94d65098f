use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{EntityTrait, Order, QueryOrder};

use crate::{
    AppState,
    entities::{prelude::Suppliers, suppliers},
    models::ErrorResponse,
};

/// Handler for GET /api/suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<suppliers::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = Suppliers::find()
        .order_by(suppliers::Column::MillId, Order::Asc)
        .all(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
        })?;

    Ok(Json(rows))
}
