//! Validated free-text search queries over task titles and descriptions.

use super::{Task, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of characters in a search query after trimming.
pub const MIN_SEARCH_QUERY_CHARS: usize = 2;

/// Validated case-insensitive search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Creates a validated search query.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SearchQueryTooShort`] when the trimmed
    /// query is shorter than [`MIN_SEARCH_QUERY_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.chars().count() < MIN_SEARCH_QUERY_CHARS {
            return Err(TaskDomainError::SearchQueryTooShort {
                min: MIN_SEARCH_QUERY_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the query text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the query occurs in the task title or
    /// description, ignoring case.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.0.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task
                .description()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
