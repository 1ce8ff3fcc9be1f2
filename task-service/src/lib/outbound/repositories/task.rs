use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::task::errors::TaskError;
use crate::task::models::Task;
use crate::task::models::TaskId;
use crate::task::models::TaskPage;
use crate::task::models::TaskQuery;
use crate::task::models::TaskStats;
use crate::task::models::TaskStatus;
use crate::task::models::Title;
use crate::task::ports::TaskRepository;
use crate::user::models::UserId;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn try_into_task(self) -> Result<Task, TaskError> {
        let status = TaskStatus::from_str(&self.status).ok_or_else(|| {
            TaskError::DatabaseError(format!("Unknown task status: {}", self.status))
        })?;

        Ok(Task {
            id: TaskId(self.id),
            user_id: UserId(self.user_id),
            title: Title::new(self.title).map_err(|e| TaskError::DatabaseError(e.to_string()))?,
            description: self.description,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, user_id, title, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id.0)
        .bind(task.user_id.0)
        .bind(task.title.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, user_id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        row.map(TaskRow::try_into_task).transpose()
    }

    async fn list(&self, user_id: &UserId, query: &TaskQuery) -> Result<TaskPage, TaskError> {
        // Optional filters collapse to NULL so one statement covers
        // every combination of the typed predicate
        let status = query.status.map(|s| s.as_str());
        let search = query.search.as_deref();

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, user_id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(user_id.0)
        .bind(status)
        .bind(search)
        .bind(i64::from(query.limit))
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM tasks
            WHERE user_id = $1
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(user_id.0)
        .bind(status)
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        let tasks = rows
            .into_iter()
            .map(TaskRow::try_into_task)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TaskPage {
            tasks,
            total: total as u64,
        })
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(task.id.0)
        .bind(task.title.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound);
        }

        Ok(task)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound);
        }

        Ok(())
    }

    async fn stats(&self, user_id: &UserId) -> Result<TaskStats, TaskError> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'COMPLETED') AS completed,
                COUNT(*) FILTER (WHERE status = 'PENDING') AS pending
            FROM tasks
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let completed: i64 = row
            .try_get("completed")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let pending: i64 = row
            .try_get("pending")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(TaskStats {
            total: total as u64,
            completed: completed as u64,
            pending: pending as u64,
        })
    }
}
