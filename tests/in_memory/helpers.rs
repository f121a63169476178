//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use eisenhower::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskLifecycleService, TaskStatsService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle and statistics services sharing one repository and clock.
pub struct Services {
    /// Lifecycle operations.
    pub lifecycle: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    /// Statistics operations.
    pub stats: TaskStatsService<InMemoryTaskRepository, DefaultClock>,
}

/// Provides a fresh repository-backed service pair for each test.
#[fixture]
pub fn services() -> Services {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);
    Services {
        lifecycle: TaskLifecycleService::new(Arc::clone(&repository), Arc::clone(&clock)),
        stats: TaskStatsService::new(repository, clock),
    }
}

/// Returns a deadline offset from the current time by whole days.
///
/// A few minutes of slack keep whole-day flooring stable when the service
/// clock reads slightly after this helper.
#[must_use]
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days) + Duration::minutes(5)
}
