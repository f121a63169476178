//! Application services for task lifecycle orchestration and statistics.

mod lifecycle;
mod stats;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleService, TaskServiceError, TaskServiceResult, TaskView,
};
pub use stats::{CompletionCounts, QuadrantCounts, QuadrantStats, TaskStatsService, TimingStats};
