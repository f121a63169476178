//! In-memory adapter used by tests and single-process deployments.

mod task;

pub use task::InMemoryTaskRepository;
