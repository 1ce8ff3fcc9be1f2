use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::session::errors::SessionError;
use crate::task::errors::TaskError;
use crate::task::models::Task;
use crate::task::models::TaskStatus;

pub mod create_task;
pub mod delete_task;
pub mod get_task;
pub mod list_tasks;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod task_stats;
pub mod toggle_task;
pub mod update_task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorBody::new(message))).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmailAlreadyExists => ApiError::Conflict(err.to_string()),
            // Refresh-path failures are all unauthorized; the logout
            // handler remaps RefreshTokenNotFound to 404 itself.
            SessionError::InvalidCredentials
            | SessionError::InvalidRefreshToken
            | SessionError::RefreshTokenNotFound
            | SessionError::RefreshTokenExpired => ApiError::Unauthorized(err.to_string()),
            SessionError::Password(_) | SessionError::Token(_) | SessionError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound => ApiError::NotFound(err.to_string()),
            TaskError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            TaskError::InvalidTaskId(_) | TaskError::InvalidTitle(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            TaskError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Error body shared by every failing endpoint: {success: false, message}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Task projection shared by every task endpoint.
///
/// Deliberately omits the owner: clients never see `userId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.as_str().to_string(),
            description: task.description.clone(),
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
