//! Service layer for task creation, updates, assignment and statistics.

use crate::response::{ClientFacingError, INTERNAL_ERROR_MESSAGE, ResponseStatus};
use crate::task::{
    domain::{
        AssignedTask, NewAssignedTask, NewTask, NewUser, ParseTaskStatusError, Task,
        TaskDomainError, TaskId, TaskProgress, TaskStatistics, TaskStatus, User, UserId,
    },
    ports::{
        AssignmentRepository, AssignmentRepositoryError, TaskRepository, TaskRepositoryError,
        UserRepository, UserRepositoryError,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Envelope message returned when a task does not exist.
pub const TASK_NOT_FOUND_MESSAGE: &str = "No Task Found with given id.";

/// Envelope message returned when a user does not exist.
pub const USER_NOT_FOUND_MESSAGE: &str = "No User Found with given id.";

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: NaiveDate,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }
}

/// Request payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    username: String,
    email: String,
}

impl CreateUserRequest {
    /// Creates a request with the required user fields.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Request payload for changing a task's status or progress.
///
/// Fields left unset keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    status: Option<String>,
    progress: Option<u8>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            status: None,
            progress: None,
        }
    }

    /// Sets the new status, parsed when the request is applied.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the new progress percentage.
    #[must_use]
    pub const fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Service-level errors for task tracking.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status is not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// No user has the requested identifier.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// User repository operation failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Assignment repository operation failed.
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),
}

impl ClientFacingError for TaskServiceError {
    fn status(&self) -> ResponseStatus {
        match self {
            Self::Domain(_)
            | Self::InvalidStatus(_)
            | Self::TaskNotFound(_)
            | Self::UserNotFound(_)
            | Self::Tasks(TaskRepositoryError::NotFound(_)) => ResponseStatus::BadRequest,
            Self::Tasks(_) | Self::Users(_) | Self::Assignments(_) => {
                ResponseStatus::InternalServerError
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::InvalidStatus(err) => err.to_string(),
            Self::TaskNotFound(_) | Self::Tasks(TaskRepositoryError::NotFound(_)) => {
                TASK_NOT_FOUND_MESSAGE.to_owned()
            }
            Self::UserNotFound(_) => USER_NOT_FOUND_MESSAGE.to_owned(),
            Self::Tasks(_) | Self::Users(_) | Self::Assignments(_) => {
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking orchestration service.
#[derive(Clone)]
pub struct TaskService<T, U, A, C>
where
    T: TaskRepository,
    U: UserRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    assignments: Arc<A>,
    clock: Arc<C>,
}

impl<T, U, A, C> TaskService<T, U, A, C>
where
    T: TaskRepository,
    U: UserRepository,
    A: AssignmentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, assignments: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            assignments,
            clock,
        }
    }

    /// Creates a task in the `NOT_STARTED` state with zero progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title or
    /// [`TaskServiceError::Tasks`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
        } = request;

        let task = self
            .tasks
            .save(NewTask::new(title, description, due_date)?)
            .await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Creates a user. Usernames are not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank username or
    /// [`TaskServiceError::Users`] when persistence fails.
    pub async fn create_user(&self, request: CreateUserRequest) -> TaskServiceResult<User> {
        let CreateUserRequest { username, email } = request;

        let user = self.users.save(NewUser::new(username, email)?).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Returns every task in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Tasks`] when the lookup fails.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.tasks.find_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Computes completion statistics over every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Tasks`] when the lookup fails.
    pub async fn get_task_statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let tasks = self.tasks.find_all().await?;
        let statistics = TaskStatistics::from_tasks(&tasks);
        debug!(
            total = statistics.total_tasks(),
            completed = statistics.completed_tasks(),
            "computed task statistics"
        );
        Ok(statistics)
    }

    /// Applies a status and/or progress change to a stored task.
    ///
    /// Both values are validated before the task is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidStatus`] for an unknown status,
    /// [`TaskServiceError::Domain`] for progress above 100,
    /// [`TaskServiceError::TaskNotFound`] when the task does not exist, or a
    /// repository error when persistence fails.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let UpdateTaskRequest {
            task_id,
            status,
            progress,
        } = request;

        let new_status = status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;
        let new_progress = progress.map(TaskProgress::new).transpose()?;

        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))?;
        if let Some(next) = new_status {
            task.set_status(next);
        }
        if let Some(next) = new_progress {
            task.set_progress(next);
        }

        self.tasks.update(&task).await?;
        info!(
            task_id = %task_id,
            status = %task.status(),
            progress = task.progress().value(),
            "task updated"
        );
        Ok(task)
    }

    /// Assigns an existing task to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] or
    /// [`TaskServiceError::UserNotFound`] when either side is missing, in
    /// which case nothing is persisted, or a repository error when
    /// persistence fails.
    pub async fn assign_task(
        &self,
        task_id: TaskId,
        user_id: UserId,
    ) -> TaskServiceResult<AssignedTask> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(TaskServiceError::UserNotFound(user_id))?;

        let assignment = self
            .assignments
            .save(NewAssignedTask::new(&task, &user, &*self.clock))
            .await?;
        info!(
            task_id = %task_id,
            user_id = %user_id,
            assignment_id = %assignment.id(),
            "task assigned"
        );
        Ok(assignment)
    }

    /// Lists a user's assignments, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::UserNotFound`] when the user does not
    /// exist or a repository error when the lookup fails.
    pub async fn assignments_for_user(
        &self,
        user_id: UserId,
    ) -> TaskServiceResult<Vec<AssignedTask>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(TaskServiceError::UserNotFound(user_id));
        }
        let assignments = self.assignments.list_for_user(user_id).await?;
        debug!(user_id = %user_id, count = assignments.len(), "listed assignments");
        Ok(assignments)
    }
}
