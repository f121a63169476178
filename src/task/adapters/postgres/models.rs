//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user, if any.
    pub owner_id: Option<uuid::Uuid>,
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
    /// Derived quadrant label.
    pub quadrant: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user, if any.
    pub owner_id: Option<uuid::Uuid>,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Caller-supplied importance flag.
    pub is_important: bool,
    /// Urgency flag derived at creation.
    pub is_urgent: bool,
    /// Optional deadline.
    pub deadline_at: Option<DateTime<Utc>>,
    /// Derived quadrant label.
    pub quadrant: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Update model writing the full mutable state of a task.
///
/// `treat_none_as_null` makes cleared optional fields (description,
/// deadline, completion timestamp) persist as SQL `NULL` instead of being
/// skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
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
    /// Derived quadrant label.
    pub quadrant: String,
    /// Completion flag.
    pub completed: bool,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}
