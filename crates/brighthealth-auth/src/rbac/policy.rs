//! Decides whether an actor may perform an action on user records.

use std::fmt;

use brighthealth_core::error::AppError;
use brighthealth_entity::user::{User, UserRole};

/// Message returned for every denied action.
pub const NOT_ENOUGH_PERMISSIONS: &str = "Not enough permissions";

/// An operation on user records that requires authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// List every user.
    ListAll,
    /// Read the user with the given id.
    Read(i64),
    /// Update the user with the given id.
    Update(i64),
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListAll => write!(f, "list_all"),
            Self::Read(id) => write!(f, "read:{id}"),
            Self::Update(id) => write!(f, "update:{id}"),
        }
    }
}

/// Pure role and ownership policy.
///
/// Admins may do anything. Patients may read and update only their own
/// record and may never list.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Whether `actor` may perform `action`.
    pub fn is_permitted(&self, actor: &User, action: UserAction) -> bool {
        match actor.role {
            UserRole::Admin => true,
            UserRole::Patient => match action {
                UserAction::ListAll => false,
                UserAction::Read(target) | UserAction::Update(target) => target == actor.id,
            },
        }
    }

    /// Returns `Ok(())` if permitted, otherwise a forbidden error.
    pub fn authorize(&self, actor: &User, action: UserAction) -> Result<(), AppError> {
        if self.is_permitted(actor, action) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = actor.id,
                role = %actor.role,
                action = %action,
                "Access denied"
            );
            Err(AppError::forbidden(NOT_ENOUGH_PERMISSIONS))
        }
    }
}
