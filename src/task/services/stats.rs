//! Aggregate statistics over the visible task set.

use super::lifecycle::TaskServiceResult;
use crate::task::{
    domain::{Caller, Quadrant, TimingBucket, timing_bucket},
    ports::{TaskQuery, TaskRepository},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

/// Per-quadrant task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuadrantCounts {
    /// Important and urgent.
    pub q1: u64,
    /// Important, not urgent.
    pub q2: u64,
    /// Urgent, not important.
    pub q3: u64,
    /// Neither important nor urgent.
    pub q4: u64,
}

impl QuadrantCounts {
    const fn record(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::Q1 => self.q1 += 1,
            Quadrant::Q2 => self.q2 += 1,
            Quadrant::Q3 => self.q3 += 1,
            Quadrant::Q4 => self.q4 += 1,
        }
    }
}

/// Completed and pending task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionCounts {
    /// Completed tasks.
    pub completed: u64,
    /// Tasks still pending.
    pub pending: u64,
}

/// Quadrant and completion breakdown of the visible task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuadrantStats {
    /// Total visible tasks.
    pub total_tasks: u64,
    /// Counts per quadrant.
    pub by_quadrant: QuadrantCounts,
    /// Counts by completion status.
    pub by_status: CompletionCounts,
}

/// Schedule-adherence breakdown of the visible task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimingStats {
    /// Completed with no deadline or at or before the deadline.
    pub completed_on_time: u64,
    /// Completed after the deadline.
    pub completed_late: u64,
    /// Pending with no deadline or a deadline not yet passed.
    pub on_plan_pending: u64,
    /// Pending with the deadline already passed.
    pub overtime_pending: u64,
}

/// Statistics service over the task repository.
#[derive(Clone)]
pub struct TaskStatsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStatsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new statistics service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Computes quadrant and completion counts for tasks visible to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the listing
    /// fails.
    pub async fn quadrant_stats(&self, caller: Option<&Caller>) -> TaskServiceResult<QuadrantStats> {
        let tasks = self.repository.list(&TaskQuery::for_caller(caller)).await?;
        let mut stats = QuadrantStats::default();
        for task in &tasks {
            stats.total_tasks += 1;
            stats.by_quadrant.record(task.quadrant());
            if task.completed() {
                stats.by_status.completed += 1;
            } else {
                stats.by_status.pending += 1;
            }
        }
        Ok(stats)
    }

    /// Buckets visible tasks by schedule adherence against the current
    /// clock time.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when the listing
    /// fails.
    pub async fn timing_stats(&self, caller: Option<&Caller>) -> TaskServiceResult<TimingStats> {
        let tasks = self.repository.list(&TaskQuery::for_caller(caller)).await?;
        let now = self.clock.utc();
        let mut stats = TimingStats::default();
        for task in &tasks {
            match timing_bucket(task.deadline_at(), task.completed_at(), now) {
                TimingBucket::CompletedOnTime => stats.completed_on_time += 1,
                TimingBucket::CompletedLate => stats.completed_late += 1,
                TimingBucket::OnPlanPending => stats.on_plan_pending += 1,
                TimingBucket::OvertimePending => stats.overtime_pending += 1,
            }
        }
        Ok(stats)
    }
}
