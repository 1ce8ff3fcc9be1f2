use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::TaskData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::models::TaskQuery;
use crate::task::models::TaskStatus;
use crate::task::ports::TaskServicePort;

const MAX_LIMIT: u32 = 100;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<ListTasksResponse>, ApiError> {
    let query = params.try_into_query()?;
    let page = query.page;
    let limit = query.limit;

    let result = state.task_service.list_tasks(&user.user_id, query).await?;

    Ok(Json(ListTasksResponse {
        success: true,
        tasks: result.tasks.iter().map(TaskData::from).collect(),
        pagination: Pagination {
            page,
            limit,
            total: result.total,
            total_pages: result.total.div_ceil(u64::from(limit)),
        },
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTasksParams {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
    status: Option<String>,
    search: Option<String>,
}

fn default_page() -> u32 {
    TaskQuery::DEFAULT_PAGE
}

fn default_limit() -> u32 {
    TaskQuery::DEFAULT_LIMIT
}

impl ListTasksParams {
    fn try_into_query(self) -> Result<TaskQuery, ApiError> {
        if self.page < 1 {
            return Err(ApiError::UnprocessableEntity(
                "Page must be at least 1".to_string(),
            ));
        }
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(ApiError::UnprocessableEntity(format!(
                "Limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        let status = match self.status.as_deref() {
            None => None,
            Some(raw) => Some(TaskStatus::from_str(raw).ok_or_else(|| {
                ApiError::UnprocessableEntity(format!("Invalid status filter: {}", raw))
            })?),
        };

        Ok(TaskQuery {
            page: self.page,
            limit: self.limit,
            status,
            search: self.search.filter(|s| !s.is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTasksResponse {
    pub success: bool,
    pub tasks: Vec<TaskData>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}
