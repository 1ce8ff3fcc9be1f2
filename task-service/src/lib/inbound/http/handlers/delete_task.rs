use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::models::TaskId;
use crate::task::ports::TaskServicePort;

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .task_service
        .delete_task(&task_id, &user.user_id)
        .await?;

    Ok(Json(DeleteTaskResponse {
        success: true,
        message: "Task deleted successfully".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskResponse {
    pub success: bool,
    pub message: String,
}
