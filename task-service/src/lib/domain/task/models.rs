use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::task::errors::TaskIdError;
use crate::task::errors::TitleError;
use crate::user::models::UserId;

/// Task aggregate entity, owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: Title,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type, non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        if title.trim().is_empty() {
            return Err(TitleError::Empty);
        }
        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(TaskStatus::Pending),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// The opposite state, used by the toggle operation.
    pub fn toggled(&self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// Command to create a new task.
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: Title,
    pub description: Option<String>,
}

/// Command to partially update a task; only provided fields change.
///
/// `description` distinguishes absent (outer `None`, leave unchanged)
/// from an explicit null (`Some(None)`, clear the stored value).
#[derive(Debug)]
pub struct UpdateTaskCommand {
    pub title: Option<Title>,
    pub description: Option<Option<String>>,
}

/// Typed listing predicate: explicit fields instead of a dynamic filter.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

impl TaskQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Row offset for the requested page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
            status: None,
            search: None,
        }
    }
}

/// One page of tasks plus the unpaginated total.
#[derive(Debug)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total: u64,
}

/// Per-user task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert!(Title::new("Buy milk".to_string()).is_ok());
        assert!(matches!(
            Title::new("".to_string()),
            Err(TitleError::Empty)
        ));
        assert!(matches!(
            Title::new("   ".to_string()),
            Err(TitleError::Empty)
        ));
        assert!(matches!(
            Title::new("x".repeat(256)),
            Err(TitleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_status_toggles_both_ways() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_string_round_trip() {
        assert_eq!(TaskStatus::from_str("PENDING"), Some(TaskStatus::Pending));
        assert_eq!(
            TaskStatus::from_str("COMPLETED"),
            Some(TaskStatus::Completed)
        );
        assert_eq!(TaskStatus::from_str("pending"), None);
    }

    #[test]
    fn test_query_offset() {
        let query = TaskQuery {
            page: 3,
            limit: 10,
            status: None,
            search: None,
        };
        assert_eq!(query.offset(), 20);

        // Page 0 clamps to the first page
        let query = TaskQuery {
            page: 0,
            limit: 10,
            status: None,
            search: None,
        };
        assert_eq!(query.offset(), 0);
    }
}
