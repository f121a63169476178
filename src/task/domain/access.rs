//! Caller identity and task visibility rules.

use super::{OwnerId, Task};
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerRole {
    /// Sees and mutates every task.
    Admin,
    /// Sees and mutates only owned and unowned tasks.
    User,
}

/// Authenticated caller identity used for ownership gating.
///
/// Token validation and issuance happen outside this crate; services accept
/// an already-resolved caller, or none at all when the deployment is
/// single-user and ownership checks are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    owner_id: OwnerId,
    role: CallerRole,
}

impl Caller {
    /// Creates a caller identity.
    #[must_use]
    pub const fn new(owner_id: OwnerId, role: CallerRole) -> Self {
        Self { owner_id, role }
    }

    /// Returns the caller's owner identity.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the caller's role.
    #[must_use]
    pub const fn role(&self) -> CallerRole {
        self.role
    }

    /// Returns `true` when the caller has the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, CallerRole::Admin)
    }

    /// Returns `true` when this caller may see and mutate the task.
    ///
    /// Administrators access every task; other callers access unowned tasks
    /// and tasks they own.
    #[must_use]
    pub fn can_access(&self, task: &Task) -> bool {
        self.is_admin() || task.owner().is_none_or(|owner| owner == self.owner_id)
    }
}
