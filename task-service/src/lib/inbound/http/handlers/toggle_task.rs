use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::TaskData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::models::TaskId;
use crate::task::ports::TaskServicePort;

pub async fn toggle_task_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
) -> Result<Json<ToggleTaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let task = state
        .task_service
        .toggle_task_status(&task_id, &user.user_id)
        .await?;

    Ok(Json(ToggleTaskResponse {
        success: true,
        message: "Task status updated successfully".to_string(),
        task: (&task).into(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleTaskResponse {
    pub success: bool,
    pub message: String,
    pub task: TaskData,
}
