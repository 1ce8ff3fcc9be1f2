use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::models::TaskStats;
use crate::task::ports::TaskServicePort;

pub async fn task_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<TaskStatsResponse>, ApiError> {
    let stats = state.task_service.task_stats(&user.user_id).await?;

    Ok(Json(TaskStatsResponse {
        success: true,
        stats,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatsResponse {
    pub success: bool,
    pub stats: TaskStats,
}
