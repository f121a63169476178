//! Repository port for task persistence, lookup, and filtered listing.

use crate::task::domain::{Caller, CompletionStatus, OwnerId, Quadrant, SearchQuery, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Filter applied when listing tasks.
///
/// All criteria are conjunctive; an empty query matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    visible_to: Option<OwnerId>,
    quadrant: Option<Quadrant>,
    completion: Option<CompletionStatus>,
    search: Option<SearchQuery>,
}

impl TaskQuery {
    /// Creates a query matching every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_to: None,
            quadrant: None,
            completion: None,
            search: None,
        }
    }

    /// Creates a query scoped to what the caller may see.
    ///
    /// Administrators, and deployments without caller identities, see every
    /// task; other callers see unowned tasks plus tasks they own.
    #[must_use]
    pub fn for_caller(caller: Option<&Caller>) -> Self {
        match caller {
            Some(identity) if !identity.is_admin() => Self::new().visible_to(identity.owner_id()),
            _ => Self::new(),
        }
    }

    /// Restricts results to tasks visible to the given owner: tasks they
    /// own plus unowned tasks.
    #[must_use]
    pub const fn visible_to(mut self, owner: OwnerId) -> Self {
        self.visible_to = Some(owner);
        self
    }

    /// Restricts results to a single quadrant.
    #[must_use]
    pub const fn in_quadrant(mut self, quadrant: Quadrant) -> Self {
        self.quadrant = Some(quadrant);
        self
    }

    /// Restricts results by completion status.
    #[must_use]
    pub const fn with_completion(mut self, completion: CompletionStatus) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Restricts results to tasks matching a search query.
    #[must_use]
    pub fn with_search(mut self, search: SearchQuery) -> Self {
        self.search = Some(search);
        self
    }

    /// Returns the visibility restriction, if any.
    #[must_use]
    pub const fn visibility(&self) -> Option<OwnerId> {
        self.visible_to
    }

    /// Returns the quadrant restriction, if any.
    #[must_use]
    pub const fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Returns the completion restriction, if any.
    #[must_use]
    pub const fn completion(&self) -> Option<CompletionStatus> {
        self.completion
    }

    /// Returns the search restriction, if any.
    #[must_use]
    pub const fn search(&self) -> Option<&SearchQuery> {
        self.search.as_ref()
    }

    /// Returns `true` when the task satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.visible_to
            .is_none_or(|owner| task.owner().is_none_or(|candidate| candidate == owner))
            && self.quadrant.is_none_or(|quadrant| task.quadrant() == quadrant)
            && self
                .completion
                .is_none_or(|completion| completion.matches(task.completed()))
            && self.search.as_ref().is_none_or(|search| search.matches(task))
    }
}

/// Task persistence contract.
///
/// Each call is a single request-scoped round-trip; consistency under
/// concurrent writers to the same task is delegated to the backing store's
/// transaction isolation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists tasks matching the query, ordered by creation time then
    /// identifier.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
