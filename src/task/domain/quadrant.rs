//! Eisenhower-matrix quadrant resolution.

use super::ParseQuadrantError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eisenhower-matrix quadrant.
///
/// Fully derived from a task's importance and urgency flags; never set
/// directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Important and urgent.
    Q1,
    /// Important, not urgent.
    Q2,
    /// Urgent, not important.
    Q3,
    /// Neither important nor urgent.
    Q4,
}

impl Quadrant {
    /// Resolves the quadrant for the given importance and urgency flags.
    ///
    /// Total over the 2x2 input domain; there is no error case.
    #[must_use]
    pub const fn from_flags(is_important: bool, is_urgent: bool) -> Self {
        match (is_important, is_urgent) {
            (true, true) => Self::Q1,
            (true, false) => Self::Q2,
            (false, true) => Self::Q3,
            (false, false) => Self::Q4,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl TryFrom<&str> for Quadrant {
    type Error = ParseQuadrantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(ParseQuadrantError(value.to_owned())),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
