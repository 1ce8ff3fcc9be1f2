use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::session::errors::SessionError;
use crate::session::ports::SessionServicePort;

pub async fn logout(
    State(state): State<AppState>,
    Json(body): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, ApiError> {
    state
        .session_service
        .logout(&body.refresh_token)
        .await
        .map_err(|e| match e {
            // Unlike refresh, a missing record here is a plain 404;
            // a second logout of the same token fails.
            SessionError::RefreshTokenNotFound => ApiError::NotFound(e.to_string()),
            _ => ApiError::from(e),
        })?;

    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}
