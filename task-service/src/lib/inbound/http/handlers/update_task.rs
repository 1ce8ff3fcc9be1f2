use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::TaskData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TitleError;
use crate::task::models::TaskId;
use crate::task::models::Title;
use crate::task::models::UpdateTaskCommand;
use crate::task::ports::TaskServicePort;

pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(task_id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
    let task_id = TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let task = state
        .task_service
        .update_task(&task_id, &user.user_id, command)
        .await?;

    Ok(Json(UpdateTaskResponse {
        success: true,
        message: "Task updated successfully".to_string(),
        task: (&task).into(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    // Absent and explicit null deserialize differently: absent leaves
    // the description alone, null clears it
    #[serde(default, deserialize_with = "double_option")]
    description: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateTaskRequest {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TitleError> {
        let title = self.title.map(Title::new).transpose()?;
        Ok(UpdateTaskCommand {
            title,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskResponse {
    pub success: bool,
    pub message: String,
    pub task: TaskData,
}
