use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{EntityTrait, Order, QueryOrder};

use crate::{
    AppState,
    entities::{consignees, prelude::Consignees},
    models::ErrorResponse,
};

/// Handler for GET /api/consignees
pub async fn list_consignees(
    State(state): State<AppState>,
) -> Result<Json<Vec<consignees::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = Consignees::find()
        .order_by(consignees::Column::ConsigneeId, Order::Asc)
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
