//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The search query is shorter than the allowed minimum.
    #[error("search query must be at least {min} characters")]
    SearchQueryTooShort {
        /// Minimum accepted query length in characters.
        min: usize,
    },
}

/// Error returned while parsing quadrant labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quadrant '{0}', expected Q1, Q2, Q3, or Q4")]
pub struct ParseQuadrantError(pub String);

/// Error returned while parsing completion status filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown completion status '{0}', expected completed or pending")]
pub struct ParseCompletionStatusError(pub String);
