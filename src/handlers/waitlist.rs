use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    models::ErrorResponse,
    models::waitlist::{WaitlistEmailRequest, WaitlistEmailResponse},
};

/// Handler for POST /api/sendWaitlistEmail
pub async fn send_waitlist_email(
    State(state): State<AppState>,
    Json(request): Json<WaitlistEmailRequest>,
) -> Result<Json<WaitlistEmailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let resend = state.resend.as_ref().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Missing RESEND_API_KEY configuration".to_string(),
            }),
        )
    })?;

    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing email".to_string(),
                }),
            )
        })?;

    resend
        .send_waitlist_email(request.full_name.as_deref(), email)
        .await
        .map_err(|e| {
            tracing::error!("Error sending waitlist email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to send email".to_string(),
                }),
            )
        })?;

    Ok(Json(WaitlistEmailResponse { sent: true }))
}
