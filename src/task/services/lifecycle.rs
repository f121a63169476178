//! Service layer for task creation, retrieval, update, and completion.
//!
//! Every mutation runs the reconciliation rule through the domain aggregate,
//! and every response projects deadline status fresh from the service clock,
//! so derived fields can never drift between the create, update, and read
//! paths.

use crate::task::{
    domain::{
        Caller, CompletionStatus, NewTask, OwnerId, Quadrant, SearchQuery, Task, TaskDomainError,
        TaskId, TaskPatch, deadline_status,
    },
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Urgency and quadrant are always derived; they cannot be supplied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    is_important: bool,
    deadline_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, is_important: bool) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_important,
            deadline_at: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline_at: DateTime<Utc>) -> Self {
        self.deadline_at = Some(deadline_at);
        self
    }
}

/// Read model returned to callers.
///
/// `days_until_deadline` and `status_message` are projected from the service
/// clock at response time and are never persisted; callers must not cache
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Owning user, if any.
    pub owner: Option<OwnerId>,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Caller-supplied importance flag.
    pub is_important: bool,
    /// Urgency flag derived at the last write.
    pub is_urgent: bool,
    /// Optional deadline.
    pub deadline_at: Option<DateTime<Utc>>,
    /// Derived Eisenhower quadrant.
    pub quadrant: Quadrant,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Whole days until the deadline, negative once overdue.
    pub days_until_deadline: Option<i64>,
    /// Human-readable deadline summary.
    pub status_message: Option<String>,
}

impl TaskView {
    /// Projects a task snapshot at the given instant.
    #[must_use]
    pub fn project(task: &Task, now: DateTime<Utc>) -> Self {
        let status = deadline_status(task.deadline_at(), now);
        Self {
            id: task.id(),
            owner: task.owner(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            is_important: task.is_important(),
            is_urgent: task.is_urgent(),
            deadline_at: task.deadline_at(),
            quadrant: task.quadrant(),
            completed: task.completed(),
            created_at: task.created_at(),
            completed_at: task.completed_at(),
            days_until_deadline: status.days_until_deadline,
            status_message: status.status_message,
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The caller may not access the task.
    #[error("access to task {0} is forbidden")]
    Forbidden(TaskId),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task, deriving urgency and quadrant before persisting.
    ///
    /// The task is owned by the caller when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<TaskView> {
        let CreateTaskRequest {
            title,
            description,
            is_important,
            deadline_at,
        } = request;
        let task = Task::new(
            NewTask {
                title,
                description,
                is_important,
                deadline_at,
                owner: caller.map(Caller::owner_id),
            },
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        Ok(self.view(&task))
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or [`TaskServiceError::Forbidden`] when the caller may not see it.
    pub async fn get(&self, id: TaskId, caller: Option<&Caller>) -> TaskServiceResult<TaskView> {
        let task = self.load_authorized(id, caller).await?;
        Ok(self.view(&task))
    }

    /// Lists every task visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list(&self, caller: Option<&Caller>) -> TaskServiceResult<Vec<TaskView>> {
        self.list_matching(TaskQuery::for_caller(caller)).await
    }

    /// Lists visible tasks in the given quadrant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list_by_quadrant(
        &self,
        quadrant: Quadrant,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<Vec<TaskView>> {
        self.list_matching(TaskQuery::for_caller(caller).in_quadrant(quadrant))
            .await
    }

    /// Lists visible tasks filtered by completion status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn list_by_completion(
        &self,
        completion: CompletionStatus,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<Vec<TaskView>> {
        self.list_matching(TaskQuery::for_caller(caller).with_completion(completion))
            .await
    }

    /// Searches visible tasks by title and description, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the query is too short or
    /// [`TaskServiceError::Repository`] when the listing fails.
    pub async fn search(
        &self,
        query: &str,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<Vec<TaskView>> {
        let search = SearchQuery::new(query)?;
        self.list_matching(TaskQuery::for_caller(caller).with_search(search))
            .await
    }

    /// Applies a partial update and re-derives urgency and quadrant.
    ///
    /// Fields omitted from the patch are left untouched; derived fields are
    /// recomputed on every call regardless of which fields changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Forbidden`] when the caller may not touch it, or
    /// [`TaskServiceError::Domain`] when the patch carries a blank title.
    pub async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<TaskView> {
        let mut task = self.load_authorized(id, caller).await?;
        task.apply_patch(patch, &*self.clock)?;
        self.repository.save(&task).await?;
        Ok(self.view(&task))
    }

    /// Marks a task completed.
    ///
    /// Completing an already-completed task keeps the original completion
    /// timestamp. Urgency and quadrant are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or [`TaskServiceError::Forbidden`] when the caller may not touch it.
    pub async fn complete(
        &self,
        id: TaskId,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<TaskView> {
        let mut task = self.load_authorized(id, caller).await?;
        task.complete(&*self.clock);
        self.repository.save(&task).await?;
        Ok(self.view(&task))
    }

    /// Removes a task. There is no undo.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// or [`TaskServiceError::Forbidden`] when the caller may not touch it.
    pub async fn delete(&self, id: TaskId, caller: Option<&Caller>) -> TaskServiceResult<()> {
        let task = self.load_authorized(id, caller).await?;
        self.repository.delete(task.id()).await?;
        Ok(())
    }

    async fn load_authorized(
        &self,
        id: TaskId,
        caller: Option<&Caller>,
    ) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        if caller.is_some_and(|identity| !identity.can_access(&task)) {
            return Err(TaskServiceError::Forbidden(id));
        }
        Ok(task)
    }

    async fn list_matching(&self, query: TaskQuery) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.list(&query).await?;
        let now = self.clock.utc();
        Ok(tasks
            .iter()
            .map(|task| TaskView::project(task, now))
            .collect())
    }

    fn view(&self, task: &Task) -> TaskView {
        TaskView::project(task, self.clock.utc())
    }
}
