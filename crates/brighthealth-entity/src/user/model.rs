//! User entity model and the inputs that create or change it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user.
#[derive(Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique, immutable identifier assigned by the directory.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub full_name: String,
    /// User role.
    pub role: UserRole,
    /// Whether the account may use authenticated endpoints.
    pub is_active: bool,
    /// Argon2 password hash. Never serialized.
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .field("hashed_password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// A registration request as submitted by the caller.
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Requested role.
    #[serde(default)]
    pub role: UserRole,
    /// Initial active flag.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Plaintext password; hashed before it reaches the directory.
    pub password: String,
}

impl fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Data handed to the directory to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Initial active flag.
    pub is_active: bool,
    /// Pre-computed password hash.
    pub hashed_password: String,
}

impl NewUser {
    /// Builds the directory input from a registration and its computed hash.
    pub fn from_registration(registration: RegisterUser, hashed_password: String) -> Self {
        Self {
            email: registration.email,
            username: registration.username,
            full_name: registration.full_name,
            role: registration.role,
            is_active: registration.is_active,
            hashed_password,
        }
    }
}

/// A partial update as submitted by the caller. Absent fields are left untouched.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// New plaintext password.
    #[serde(default)]
    pub password: Option<String>,
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPatch")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// Storage-level partial update handed to the directory.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub full_name: Option<String>,
    /// Freshly computed password hash.
    pub hashed_password: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl UserChanges {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.full_name.is_none()
            && self.hashed_password.is_none()
            && self.is_active.is_none()
    }

    /// Applies the present fields to `user` in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(hash) = &self.hashed_password {
            user.hashed_password = hash.clone();
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}

fn default_true() -> bool {
    true
}
