//! Listing, viewing, and updating user records on behalf of a caller.

use std::sync::Arc;

use tracing::info;

use brighthealth_auth::password::PasswordHasher;
use brighthealth_auth::rbac::{AccessPolicy, UserAction};
use brighthealth_core::error::AppError;
use brighthealth_core::types::PageRequest;
use brighthealth_database::UserDirectory;
use brighthealth_entity::user::{User, UserChanges, UserPatch};

/// Message for a permitted lookup of a record that does not exist.
pub const USER_NOT_FOUND: &str = "User not found";

/// Handles user record operations.
///
/// Every operation authorizes the caller first, so an unpermitted caller
/// cannot probe which ids exist.
#[derive(Clone)]
pub struct UserService {
    /// User directory.
    directory: Arc<dyn UserDirectory>,
    /// Password hasher for password changes.
    hasher: Arc<PasswordHasher>,
    /// Role and ownership policy.
    policy: AccessPolicy,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<PasswordHasher>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            directory,
            hasher,
            policy,
        }
    }

    /// Lists users ordered by id. Admin only.
    pub async fn list_users(&self, caller: &User, page: PageRequest) -> Result<Vec<User>, AppError> {
        self.policy.authorize(caller, UserAction::ListAll)?;
        self.directory.list(&page).await
    }

    /// Gets a single user by id.
    pub async fn get_user(&self, caller: &User, id: i64) -> Result<User, AppError> {
        self.policy.authorize(caller, UserAction::Read(id))?;
        self.directory
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// Applies a partial update to a user.
    ///
    /// A present password is hashed before it reaches the directory.
    pub async fn update_user(
        &self,
        caller: &User,
        id: i64,
        patch: UserPatch,
    ) -> Result<User, AppError> {
        self.policy.authorize(caller, UserAction::Update(id))?;

        let hashed_password = match patch.password.as_deref() {
            Some(password) => Some(self.hasher.spawn_hash(password).await?),
            None => None,
        };
        let changes = UserChanges {
            email: patch.email,
            full_name: patch.full_name,
            hashed_password,
            is_active: patch.is_active,
        };

        if changes.is_empty() {
            return self.get_user(caller, id).await;
        }

        let password_changed = changes.hashed_password.is_some();
        let user = self
            .directory
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        info!(
            user_id = user.id,
            updated_by = caller.id,
            password_changed,
            "User updated"
        );

        Ok(user)
    }
}
