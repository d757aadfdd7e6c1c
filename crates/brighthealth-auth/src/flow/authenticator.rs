//! Login and registration flow.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use brighthealth_core::error::AppError;
use brighthealth_database::UserDirectory;
use brighthealth_entity::user::{NewUser, RegisterUser, User};

use crate::jwt::TokenService;
use crate::password::PasswordHasher;

/// Uniform message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// Token type reported alongside every access token.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

/// Validates credentials against the directory and issues access tokens.
#[derive(Clone)]
pub struct AuthenticationFlow {
    /// User directory.
    directory: Arc<dyn UserDirectory>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    tokens: Arc<TokenService>,
    /// Lifetime of issued access tokens.
    access_ttl: Duration,
}

impl std::fmt::Debug for AuthenticationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationFlow")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl AuthenticationFlow {
    /// Creates a new authentication flow.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
        access_ttl: Duration,
    ) -> Self {
        Self {
            directory,
            hasher,
            tokens,
            access_ttl,
        }
    }

    /// Checks a username and plaintext password.
    ///
    /// An unknown username and a wrong password fail with the same error.
    /// The active flag is not consulted here.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.directory.get_by_username(username).await? else {
            warn!(username = %username, "Login attempt for unknown username");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self
            .hasher
            .spawn_verify(password, &user.hashed_password)
            .await
        {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Authenticates and issues an access token with the configured lifetime.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AppError> {
        let user = self.authenticate(username, password).await?;
        let issued = self.tokens.issue(&user.username, self.access_ttl)?;

        info!(
            user_id = user.id,
            expires_at = %issued.expires_at,
            "Login successful"
        );

        Ok(AccessToken {
            access_token: issued.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        })
    }

    /// Registers a new user.
    ///
    /// Email uniqueness is checked before username uniqueness. The directory
    /// enforces both again atomically on insert.
    pub async fn register(&self, registration: RegisterUser) -> Result<User, AppError> {
        if self
            .directory
            .get_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Email already registered"));
        }

        if self
            .directory
            .get_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already registered"));
        }

        let hashed_password = self.hasher.spawn_hash(&registration.password).await?;
        let user = self
            .directory
            .create(NewUser::from_registration(registration, hashed_password))
            .await?;

        info!(
            user_id = user.id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(user)
    }
}
