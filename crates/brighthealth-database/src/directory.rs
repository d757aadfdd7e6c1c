//! The user directory contract.

use async_trait::async_trait;

use brighthealth_core::result::AppResult;
use brighthealth_core::types::PageRequest;
use brighthealth_entity::user::{NewUser, User, UserChanges};

/// Lookup, create, and update of user records.
///
/// The auth core only ever checks-then-creates, so implementations must
/// enforce username and email uniqueness atomically inside [`create`] and
/// [`update`]: of two concurrent creates for the same username or email at
/// most one may succeed, and the loser gets an
/// [`ErrorKind::Conflict`](brighthealth_core::ErrorKind::Conflict).
///
/// [`create`]: UserDirectory::create
/// [`update`]: UserDirectory::update
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Find a user by id.
    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users ordered by id.
    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>>;

    /// Insert a new user and return it with its assigned id.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Apply the present fields of `changes` to user `id`.
    ///
    /// Returns `Ok(None)` when no such user exists.
    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>>;
}
