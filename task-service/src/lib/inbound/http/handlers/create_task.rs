use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::TaskData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TitleError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Title;
use crate::task::ports::TaskServicePort;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<CreateTaskResponse>), ApiError> {
    let command = body.try_into_command()?;

    let task = state
        .task_service
        .create_task(&user.user_id, command)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTaskResponse {
            success: true,
            message: "Task created successfully".to_string(),
            task: (&task).into(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    fn try_into_command(self) -> Result<CreateTaskCommand, TitleError> {
        let title = Title::new(self.title)?;
        Ok(CreateTaskCommand {
            title,
            description: self.description,
        })
    }
}

impl From<TitleError> for ApiError {
    fn from(err: TitleError) -> Self {
        ApiError::UnprocessableEntity(format!("Invalid title: {}", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskResponse {
    pub success: bool,
    pub message: String,
    pub task: TaskData,
}
