use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::task::errors::TaskError;
use crate::task::models::CreateTaskCommand;
use crate::task::models::Task;
use crate::task::models::TaskId;
use crate::task::models::TaskPage;
use crate::task::models::TaskQuery;
use crate::task::models::TaskStats;
use crate::task::models::TaskStatus;
use crate::task::models::UpdateTaskCommand;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;
use crate::user::models::UserId;

/// Domain service for ownership-scoped task operations.
///
/// Trusts the identity handed to it by the auth gate; every read of a
/// specific task re-checks ownership against the stored owner.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn find_owned(
        &self,
        task_id: &TaskId,
        user_id: &UserId,
        action: &str,
    ) -> Result<Task, TaskError> {
        let task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        if task.user_id != *user_id {
            return Err(TaskError::forbidden(action));
        }

        Ok(task)
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn list_tasks(
        &self,
        user_id: &UserId,
        query: TaskQuery,
    ) -> Result<TaskPage, TaskError> {
        self.repository.list(user_id, &query).await
    }

    async fn get_task(&self, task_id: &TaskId, user_id: &UserId) -> Result<Task, TaskError> {
        self.find_owned(task_id, user_id, "access").await
    }

    async fn create_task(
        &self,
        user_id: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        let now = Utc::now();

        let task = Task {
            id: TaskId::new(),
            user_id: *user_id,
            title: command.title,
            description: command.description,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(task).await
    }

    async fn update_task(
        &self,
        task_id: &TaskId,
        user_id: &UserId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self.find_owned(task_id, user_id, "update").await?;

        if let Some(new_title) = command.title {
            task.title = new_title;
        }
        // Some(None) clears the description, None leaves it untouched
        if let Some(new_description) = command.description {
            task.description = new_description;
        }
        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn delete_task(&self, task_id: &TaskId, user_id: &UserId) -> Result<(), TaskError> {
        self.find_owned(task_id, user_id, "delete").await?;
        self.repository.delete(task_id).await
    }

    async fn toggle_task_status(
        &self,
        task_id: &TaskId,
        user_id: &UserId,
    ) -> Result<Task, TaskError> {
        let mut task = self.find_owned(task_id, user_id, "update").await?;

        task.status = task.status.toggled();
        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn task_stats(&self, user_id: &UserId) -> Result<TaskStats, TaskError> {
        self.repository.stats(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::task::models::Title;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
            async fn list(&self, user_id: &UserId, query: &TaskQuery) -> Result<TaskPage, TaskError>;
            async fn update(&self, task: Task) -> Result<Task, TaskError>;
            async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
            async fn stats(&self, user_id: &UserId) -> Result<TaskStats, TaskError>;
        }
    }

    fn task_owned_by(user_id: UserId) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            user_id,
            title: Title::new("Buy milk".to_string()).unwrap(),
            description: None,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_task_defaults_to_pending() {
        let mut repository = MockTestTaskRepository::new();
        let user_id = UserId::new();

        repository
            .expect_create()
            .withf(move |task| {
                task.user_id == user_id
                    && task.status == TaskStatus::Pending
                    && task.title.as_str() == "Buy milk"
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = CreateTaskCommand {
            title: Title::new("Buy milk".to_string()).unwrap(),
            description: None,
        };

        let task = service.create_task(&user_id, command).await.unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_task_enforces_ownership() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();
        let stranger = UserId::new();

        let task = task_owned_by(owner);
        repository
            .expect_find_by_id()
            .times(2)
            .returning(move |_| Ok(Some(task.clone())));

        let service = TaskService::new(Arc::new(repository));

        let task_id = TaskId::new();
        assert!(service.get_task(&task_id, &owner).await.is_ok());

        let result = service.get_task(&task_id, &stranger).await;
        assert!(matches!(result.unwrap_err(), TaskError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));

        let result = service.get_task(&TaskId::new(), &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound));
    }

    #[tokio::test]
    async fn test_update_task_applies_partial_fields() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();

        let task = task_owned_by(owner);
        let original_updated_at = task.updated_at;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(task.clone())));
        repository
            .expect_update()
            .withf(move |task| {
                task.title.as_str() == "New title"
                    && task.description.is_none()
                    && task.updated_at >= original_updated_at
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: Some(Title::new("New title".to_string()).unwrap()),
            description: None,
        };

        let updated = service
            .update_task(&TaskId::new(), &owner, command)
            .await
            .unwrap();
        assert_eq!(updated.title.as_str(), "New title");
    }

    #[tokio::test]
    async fn test_update_task_explicit_null_clears_description() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();

        let mut task = task_owned_by(owner);
        task.description = Some("2% milk".to_string());
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(task.clone())));
        repository
            .expect_update()
            .withf(|task| task.description.is_none() && task.title.as_str() == "Buy milk")
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: None,
            description: Some(None),
        };

        let updated = service
            .update_task(&TaskId::new(), &owner, command)
            .await
            .unwrap();
        assert!(updated.description.is_none());
    }

    #[tokio::test]
    async fn test_update_task_forbidden_for_other_user() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();

        let task = task_owned_by(owner);
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(task.clone())));
        repository.expect_update().times(0);

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: Some(Title::new("Hijacked".to_string()).unwrap()),
            description: None,
        };

        let result = service
            .update_task(&TaskId::new(), &UserId::new(), command)
            .await;
        assert!(matches!(result.unwrap_err(), TaskError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_delete_task_forbidden_for_other_user() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();

        let task = task_owned_by(owner);
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(task.clone())));
        repository.expect_delete().times(0);

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(&TaskId::new(), &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), TaskError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_delete_task_success() {
        let mut repository = MockTestTaskRepository::new();
        let owner = UserId::new();

        let task = task_owned_by(owner);
        let task_id = task.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(task.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = TaskService::new(Arc::new(repository));

        assert!(service.delete_task(&task_id, &owner).await.is_ok());
    }

    #[tokio::test]
    async fn test_toggle_flips_status_both_ways() {
        let owner = UserId::new();

        for (start, expected) in [
            (TaskStatus::Pending, TaskStatus::Completed),
            (TaskStatus::Completed, TaskStatus::Pending),
        ] {
            let mut repository = MockTestTaskRepository::new();

            let mut task = task_owned_by(owner);
            task.status = start;
            repository
                .expect_find_by_id()
                .times(1)
                .returning(move |_| Ok(Some(task.clone())));
            repository
                .expect_update()
                .withf(move |task| task.status == expected)
                .times(1)
                .returning(|task| Ok(task));

            let service = TaskService::new(Arc::new(repository));

            let toggled = service
                .toggle_task_status(&TaskId::new(), &owner)
                .await
                .unwrap();
            assert_eq!(toggled.status, expected);
        }
    }

    #[tokio::test]
    async fn test_task_stats_passthrough() {
        let mut repository = MockTestTaskRepository::new();
        let user_id = UserId::new();

        repository
            .expect_stats()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| {
                Ok(TaskStats {
                    total: 5,
                    completed: 2,
                    pending: 3,
                })
            });

        let service = TaskService::new(Arc::new(repository));

        let stats = service.task_stats(&user_id).await.unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 3);
    }
}
