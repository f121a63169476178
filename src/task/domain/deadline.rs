//! Deadline-driven urgency classification and status projection.
//!
//! Every function here is pure and side-effect free: `now` is always
//! supplied explicitly by the caller, never read from a global clock, so
//! results are deterministic and safe to invoke concurrently.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Forward window, in whole days, within which a deadline makes a task
/// urgent.
///
/// A task is urgent when its deadline is overdue, due today, or due within
/// this many days ahead. Tasks without a deadline are never urgent.
pub const URGENT_WINDOW_DAYS: i64 = 1;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the number of whole days from `now` until `deadline`.
///
/// Floors toward negative infinity, so a deadline behind `now` by any
/// fraction of a day already counts as -1.
#[must_use]
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (deadline - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Derives the urgency flag from an optional deadline.
///
/// Returns `false` when no deadline is set; otherwise `true` when the
/// deadline lies at most [`URGENT_WINDOW_DAYS`] whole days ahead of `now`,
/// which covers overdue and same-day deadlines.
#[must_use]
pub fn classify_urgency(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    deadline.is_some_and(|at| days_until(at, now) <= URGENT_WINDOW_DAYS)
}

/// Deadline standing computed at read time.
///
/// Both fields are absent when the task has no deadline. The projection is
/// never persisted and must be recomputed for every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    /// Whole days until the deadline; negative once overdue.
    pub days_until_deadline: Option<i64>,
    /// Human-readable deadline summary.
    pub status_message: Option<String>,
}

/// Computes the deadline status for an optional deadline at `now`.
#[must_use]
pub fn deadline_status(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DeadlineStatus {
    deadline.map_or_else(DeadlineStatus::default, |at| {
        let days = days_until(at, now);
        let message = if days < 0 {
            "overdue".to_owned()
        } else if days == 0 {
            "deadline is today".to_owned()
        } else if days == 1 {
            "1 day until deadline".to_owned()
        } else {
            format!("{days} days until deadline")
        };
        DeadlineStatus {
            days_until_deadline: Some(days),
            status_message: Some(message),
        }
    })
}

/// Schedule-adherence bucket for timing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Completed with no deadline or at or before the deadline instant.
    CompletedOnTime,
    /// Completed after the deadline instant.
    CompletedLate,
    /// Pending with no deadline or a deadline not yet passed.
    OnPlanPending,
    /// Pending with the deadline already passed.
    OvertimePending,
}

/// Buckets a task's schedule standing for timing statistics.
///
/// Instants are compared directly rather than in floored days, so a task
/// completed after the deadline instant on the same day counts as late.
#[must_use]
pub fn timing_bucket(
    deadline: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> TimingBucket {
    match completed_at {
        Some(done) => {
            if deadline.is_none_or(|at| done <= at) {
                TimingBucket::CompletedOnTime
            } else {
                TimingBucket::CompletedLate
            }
        }
        None => {
            if deadline.is_none_or(|at| now <= at) {
                TimingBucket::OnPlanPending
            } else {
                TimingBucket::OvertimePending
            }
        }
    }
}
