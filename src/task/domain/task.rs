//! Task aggregate root, partial updates, and derived-field reconciliation.

use super::{
    OwnerId, ParseCompletionStatusError, Quadrant, TaskDomainError, TaskId, classify_urgency,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Completion filter over task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Task has been completed.
    Completed,
    /// Task is still pending.
    Pending,
}

impl CompletionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Returns `true` when a task with the given completion flag matches
    /// this filter.
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::Completed => completed,
            Self::Pending => !completed,
        }
    }
}

impl TryFrom<&str> for CompletionStatus {
    type Error = ParseCompletionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            _ => Err(ParseCompletionStatusError(value.to_owned())),
        }
    }
}

/// A nullable field inside a partial update payload.
///
/// Distinguishes a field the caller omitted (leave the stored value
/// untouched) from a field explicitly set to `null` (clear the stored
/// value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchField<T> {
    /// Field absent from the payload; the stored value is kept.
    #[default]
    Omitted,
    /// Field explicitly set to `null`; the stored value is cleared.
    Clear,
    /// Field set to a new value.
    Set(T),
}

impl<T> PatchField<T> {
    /// Applies this patch field to a stored optional value.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Omitted => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Clear, Self::Set))
    }
}

/// Partial update payload.
///
/// Only fields present in the payload are applied to the task; everything
/// else is left untouched. Nullable fields (`description`, `deadline_at`)
/// use [`PatchField`] so an explicit `null` clears the stored value, while
/// for the non-nullable fields `null` is treated the same as omission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; `null` clears it.
    #[serde(default)]
    pub description: PatchField<String>,
    /// Replacement importance flag.
    #[serde(default)]
    pub is_important: Option<bool>,
    /// Replacement deadline; `null` clears it and urgency is recomputed
    /// from the cleared value.
    #[serde(default)]
    pub deadline_at: PatchField<DateTime<Utc>>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title; must be non-blank.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Caller-supplied importance flag.
    pub is_important: bool,
    /// Optional deadline.
    pub deadline_at: Option<DateTime<Utc>>,
    /// Owning user, when the deployment is multi-user.
    pub owner: Option<OwnerId>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner reference, if any.
    pub owner: Option<OwnerId>,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted importance flag.
    pub is_important: bool,
    /// Persisted urgency flag as derived at the last write.
    pub is_urgent: bool,
    /// Persisted deadline, if any.
    pub deadline_at: Option<DateTime<Utc>>,
    /// Persisted quadrant label.
    pub quadrant: Quadrant,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Task aggregate root.
///
/// `is_urgent` and `quadrant` are derived fields: they are recomputed from
/// `deadline_at` and `is_important` on creation and on every partial update,
/// and are never accepted from callers. The urgency snapshot reflects the
/// clock at the last write; it is not re-evaluated passively as time passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: Option<OwnerId>,
    title: String,
    description: Option<String>,
    is_important: bool,
    is_urgent: bool,
    deadline_at: Option<DateTime<Utc>>,
    quadrant: Quadrant,
    completed: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task, deriving urgency and quadrant from the supplied
    /// fields at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(data: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let now = clock.utc();
        let is_urgent = classify_urgency(data.deadline_at, now);
        Ok(Self {
            id: TaskId::new(),
            owner: data.owner,
            title: validated_title(&data.title)?,
            description: data.description,
            is_important: data.is_important,
            is_urgent,
            deadline_at: data.deadline_at,
            quadrant: Quadrant::from_flags(data.is_important, is_urgent),
            completed: false,
            created_at: now,
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            is_important: data.is_important,
            is_urgent: data.is_urgent,
            deadline_at: data.deadline_at,
            quadrant: data.quadrant,
            completed: data.completed,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the caller-supplied importance flag.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.is_important
    }

    /// Returns the urgency flag as derived at the last write.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.is_urgent
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline_at(&self) -> Option<DateTime<Utc>> {
        self.deadline_at
    }

    /// Returns the derived Eisenhower quadrant.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Applies a partial update, then recomputes urgency and quadrant.
    ///
    /// Fields omitted from the patch are left untouched. The derived fields
    /// are recomputed on every call regardless of which fields were present,
    /// so they can never go stale relative to the current importance and
    /// deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a
    /// blank title; the task is left unmodified in that case.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskPatch {
            title,
            description,
            is_important,
            deadline_at,
        } = patch;

        if let Some(new_title) = title {
            self.title = validated_title(&new_title)?;
        }
        description.apply_to(&mut self.description);
        if let Some(flag) = is_important {
            self.is_important = flag;
        }
        deadline_at.apply_to(&mut self.deadline_at);

        self.reconcile(clock.utc());
        Ok(())
    }

    /// Marks the task completed at the current clock time.
    ///
    /// Completing an already-completed task is a no-op: `completed_at`
    /// keeps its first value. Urgency and quadrant are left untouched.
    pub fn complete(&mut self, clock: &impl Clock) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.completed_at = Some(clock.utc());
    }

    /// Recomputes the derived urgency flag and quadrant from the current
    /// deadline and importance.
    fn reconcile(&mut self, now: DateTime<Utc>) {
        self.is_urgent = classify_urgency(self.deadline_at, now);
        self.quadrant = Quadrant::from_flags(self.is_important, self.is_urgent);
    }
}

/// Normalizes a title, rejecting blank values.
fn validated_title(raw: &str) -> Result<String, TaskDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(normalized.to_owned())
}
