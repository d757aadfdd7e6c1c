//! Resolves the caller behind a bearer token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use brighthealth_core::error::AppError;
use brighthealth_database::UserDirectory;
use brighthealth_entity::user::User;

use crate::jwt::TokenService;

/// Uniform message for any token that does not resolve to a user.
pub const INVALID_TOKEN: &str = "Could not validate credentials";

/// Message for a resolved user whose account is disabled.
pub const INACTIVE_USER: &str = "Inactive user";

/// Turns a bearer token into the user it was issued for.
#[derive(Clone)]
pub struct SessionResolver {
    directory: Arc<dyn UserDirectory>,
    tokens: Arc<TokenService>,
}

impl std::fmt::Debug for SessionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResolver").finish_non_exhaustive()
    }
}

impl SessionResolver {
    /// Creates a new resolver.
    pub fn new(directory: Arc<dyn UserDirectory>, tokens: Arc<TokenService>) -> Self {
        Self { directory, tokens }
    }

    /// Resolves `token` to the user it names.
    ///
    /// An invalid token and a token whose user no longer exists fail the
    /// same way.
    pub async fn resolve(&self, token: &str) -> Result<User, AppError> {
        self.resolve_at(token, Utc::now()).await
    }

    /// Resolves `token` as of `now`.
    pub async fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, AppError> {
        let Some(username) = self.tokens.verify_at(token, now) else {
            return Err(AppError::unauthorized(INVALID_TOKEN));
        };

        match self.directory.get_by_username(&username).await? {
            Some(user) => Ok(user),
            None => {
                debug!(username = %username, "Token subject no longer exists");
                Err(AppError::unauthorized(INVALID_TOKEN))
            }
        }
    }

    /// Rejects a disabled account.
    pub fn require_active(user: User) -> Result<User, AppError> {
        if user.is_active {
            Ok(user)
        } else {
            Err(AppError::inactive_account(INACTIVE_USER))
        }
    }

    /// Resolves `token` and requires the account to be active.
    pub async fn resolve_active(&self, token: &str) -> Result<User, AppError> {
        let user = self.resolve(token).await?;
        Self::require_active(user)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use brighthealth_core::ErrorKind;
    use brighthealth_database::MemoryUserDirectory;
    use brighthealth_entity::user::NewUser;

    use super::*;
    use crate::testing::{registration, test_tokens};

    const TTL: Duration = Duration::from_secs(30 * 60);

    async fn setup() -> (SessionResolver, Arc<MemoryUserDirectory>, Arc<TokenService>) {
        let directory = Arc::new(MemoryUserDirectory::new());
        let tokens = Arc::new(test_tokens());
        for (name, active) in [("alice", true), ("carol", false)] {
            let mut reg = registration(name, &format!("{name}@x.com"), "pw");
            reg.is_active = active;
            directory
                .create(NewUser::from_registration(reg, "hash".to_string()))
                .await
                .unwrap();
        }
        let resolver = SessionResolver::new(directory.clone(), tokens.clone());
        (resolver, directory, tokens)
    }

    #[tokio::test]
    async fn test_resolve_valid_token() {
        let (resolver, _, tokens) = setup().await;
        let token = tokens.issue("alice", TTL).unwrap().token;

        let user = resolver.resolve_active(&token).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_invalid_and_orphaned_tokens_fail_alike() {
        let (resolver, _, tokens) = setup().await;
        let orphan = tokens.issue("ghost", TTL).unwrap().token;

        let garbage = resolver.resolve("not-a-token").await.unwrap_err();
        let missing = resolver.resolve(&orphan).await.unwrap_err();

        assert_eq!(garbage.kind, ErrorKind::Unauthorized);
        assert_eq!(missing.kind, ErrorKind::Unauthorized);
        assert_eq!(garbage.message, INVALID_TOKEN);
        assert_eq!(missing.message, INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let (resolver, _, tokens) = setup().await;
        let issued = tokens.issue("alice", TTL).unwrap();

        let err = resolver
            .resolve_at(&issued.token, issued.expires_at)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_inactive_user_resolves_but_is_not_active() {
        let (resolver, _, tokens) = setup().await;
        let token = tokens.issue("carol", TTL).unwrap().token;

        let user = resolver.resolve(&token).await.unwrap();
        assert!(!user.is_active);

        let err = resolver.resolve_active(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InactiveAccount);
        assert_eq!(err.message, INACTIVE_USER);
    }
}
