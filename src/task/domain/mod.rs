//! Domain model for Eisenhower-matrix task classification.
//!
//! The task domain models quadrant resolution, deadline-driven urgency,
//! deadline status projection, and the reconciliation of derived fields
//! after partial updates, while keeping all infrastructure concerns outside
//! of the domain boundary.

mod access;
mod deadline;
mod error;
mod ids;
mod quadrant;
mod search;
mod task;

pub use access::{Caller, CallerRole};
pub use deadline::{
    DeadlineStatus, TimingBucket, URGENT_WINDOW_DAYS, classify_urgency, days_until,
    deadline_status, timing_bucket,
};
pub use error::{ParseCompletionStatusError, ParseQuadrantError, TaskDomainError};
pub use ids::{OwnerId, TaskId};
pub use quadrant::Quadrant;
pub use search::{MIN_SEARCH_QUERY_CHARS, SearchQuery};
pub use task::{CompletionStatus, NewTask, PatchField, PersistedTaskData, Task, TaskPatch};
