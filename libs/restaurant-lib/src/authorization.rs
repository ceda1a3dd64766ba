//! Ownership-based authorization for resource mutations.

use uuid::Uuid;

/// Role granting mutation rights over every resource.
pub const ADMIN_ROLE: &str = "Admin";

/// Ownership facts about a stored resource. `created_by` is set at creation
/// time and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOwnership {
    pub resource_id: Uuid,
    pub created_by: Uuid,
}

/// The identity a request acts under, as established by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser {
    pub user_id: Uuid,
    pub roles: Vec<String>,
}

impl ActingUser {
    pub fn new(user_id: Uuid, roles: impl Into<Vec<String>>) -> Self {
        Self {
            user_id,
            roles: roles.into(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Decide whether `actor` may mutate the resource described by `resource`.
///
/// The creator of a resource and administrators are allowed; everyone else
/// is denied. Absence of the resource must be handled by the caller before
/// asking for a decision, so `Deny` always means "forbidden", never
/// "not found".
pub fn authorize_mutation(resource: &ResourceOwnership, actor: &ActingUser) -> Decision {
    if actor.user_id == resource.created_by || actor.is_admin() {
        Decision::Allow
    } else {
        Decision::Deny
    }
}
