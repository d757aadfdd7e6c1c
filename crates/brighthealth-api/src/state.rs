//! Application state shared across all handlers.

use std::sync::Arc;

use brighthealth_auth::flow::AuthenticationFlow;
use brighthealth_auth::jwt::TokenService;
use brighthealth_auth::password::PasswordHasher;
use brighthealth_auth::rbac::AccessPolicy;
use brighthealth_auth::session::SessionResolver;
use brighthealth_core::config::AppConfig;
use brighthealth_core::error::AppError;
use brighthealth_database::UserDirectory;
use brighthealth_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Login and registration
    pub auth_flow: Arc<AuthenticationFlow>,
    /// Bearer token resolution
    pub session_resolver: Arc<SessionResolver>,
    /// User record management
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wires the auth components and services around a user directory.
    ///
    /// Fails when the configured signing algorithm or hashing cost is invalid.
    pub fn new(config: AppConfig, directory: Arc<dyn UserDirectory>) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth.password_hash)?);
        let tokens = Arc::new(TokenService::new(&config.auth)?);

        let auth_flow = Arc::new(AuthenticationFlow::new(
            Arc::clone(&directory),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
            config.auth.access_token_ttl()?,
        ));
        let session_resolver = Arc::new(SessionResolver::new(
            Arc::clone(&directory),
            Arc::clone(&tokens),
        ));
        let user_service = Arc::new(UserService::new(
            directory,
            hasher,
            AccessPolicy::new(),
        ));

        Ok(Self {
            config: Arc::new(config),
            auth_flow,
            session_resolver,
            user_service,
        })
    }
}
