use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{EntityTrait, Order, QueryOrder};

use crate::{
    AppState,
    entities::{debtors, prelude::Debtors},
    models::ErrorResponse,
};

/// Handler for GET /api/debtors
pub async fn list_debtors(
    State(state): State<AppState>,
) -> Result<Json<Vec<debtors::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = Debtors::find()
        .order_by(debtors::Column::ConsigneeName, Order::Asc)
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
