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

pub async fn get_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
) -> Result<Json<GetTaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let task = state.task_service.get_task(&task_id, &user.user_id).await?;

    Ok(Json(GetTaskResponse {
        success: true,
        task: (&task).into(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTaskResponse {
    pub success: bool,
    pub task: TaskData,
}
