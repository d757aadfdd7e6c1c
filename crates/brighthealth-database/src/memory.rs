//! In-memory user directory.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use brighthealth_core::error::AppError;
use brighthealth_core::result::AppResult;
use brighthealth_core::types::PageRequest;
use brighthealth_entity::user::{NewUser, User, UserChanges};

use crate::directory::UserDirectory;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn username_taken(&self, username: &str) -> bool {
        self.users.values().any(|u| u.username == username)
    }
}

/// User directory held entirely in process memory.
///
/// A single lock covers every uniqueness check and the write that follows
/// it, so concurrent creates for the same username or email cannot both
/// succeed.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    store: RwLock<Store>,
}

impl MemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    /// Returns `true` when no users are stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.username == username).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut store = self.store.write().await;

        if store.email_taken(&new_user.email, None) {
            return Err(AppError::conflict("Email already registered"));
        }
        if store.username_taken(&new_user.username) {
            return Err(AppError::conflict("Username already registered"));
        }

        store.next_id += 1;
        let user = User {
            id: store.next_id,
            email: new_user.email,
            username: new_user.username,
            full_name: new_user.full_name,
            role: new_user.role,
            is_active: new_user.is_active,
            hashed_password: new_user.hashed_password,
            created_at: Utc::now(),
            updated_at: None,
        };
        store.users.insert(user.id, user.clone());

        debug!(user_id = user.id, username = %user.username, "Stored user in memory");
        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = &changes.email {
            if store.email_taken(email, Some(id)) {
                return Err(AppError::conflict("Email already registered"));
            }
        }

        let Some(user) = store.users.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(user);
        user.updated_at = Some(Utc::now());
        Ok(Some(user.clone()))
    }
}
