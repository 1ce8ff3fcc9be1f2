use async_trait::async_trait;

use crate::task::errors::TaskError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Task;
use crate::task::models::TaskId;
use crate::task::models::TaskPage;
use crate::task::models::TaskQuery;
use crate::task::models::TaskStats;
use crate::task::models::UpdateTaskCommand;
use crate::user::models::UserId;

/// Port for ownership-scoped task operations.
///
/// Every operation takes the authenticated user's identity and enforces
/// that mutations and reads only touch that user's tasks.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// List one page of the user's tasks, filtered and newest first.
    async fn list_tasks(&self, user_id: &UserId, query: TaskQuery)
        -> Result<TaskPage, TaskError>;

    /// Retrieve a single task.
    ///
    /// # Errors
    /// * `NotFound` - No task with this ID
    /// * `Forbidden` - Task belongs to another user
    async fn get_task(&self, task_id: &TaskId, user_id: &UserId) -> Result<Task, TaskError>;

    /// Create a task owned by the user, status defaulting to pending.
    async fn create_task(
        &self,
        user_id: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Partially update a task the user owns.
    ///
    /// # Errors
    /// * `NotFound` - No task with this ID
    /// * `Forbidden` - Task belongs to another user
    async fn update_task(
        &self,
        task_id: &TaskId,
        user_id: &UserId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Delete a task the user owns.
    ///
    /// # Errors
    /// * `NotFound` - No task with this ID
    /// * `Forbidden` - Task belongs to another user
    async fn delete_task(&self, task_id: &TaskId, user_id: &UserId) -> Result<(), TaskError>;

    /// Flip a task between pending and completed.
    ///
    /// # Errors
    /// * `NotFound` - No task with this ID
    /// * `Forbidden` - Task belongs to another user
    async fn toggle_task_status(
        &self,
        task_id: &TaskId,
        user_id: &UserId,
    ) -> Result<Task, TaskError>;

    /// Count the user's tasks by status.
    async fn task_stats(&self, user_id: &UserId) -> Result<TaskStats, TaskError>;
}

/// Persistence operations for the task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist a new task.
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve a task by identifier, regardless of owner.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// One page of a user's tasks matching the query, newest first,
    /// plus the unpaginated match count.
    async fn list(&self, user_id: &UserId, query: &TaskQuery) -> Result<TaskPage, TaskError>;

    /// Update an existing task.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove a task.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;

    /// Status counts for a user's tasks.
    async fn stats(&self, user_id: &UserId) -> Result<TaskStats, TaskError>;
}
