//! Shared fixtures for unit tests.

use brighthealth_core::config::{AuthConfig, PasswordHashConfig};
use brighthealth_entity::user::{RegisterUser, UserRole};

use crate::jwt::TokenService;
use crate::password::PasswordHasher;

/// Cheap Argon2 parameters so tests do not spend seconds hashing.
pub fn fast_hash_config() -> PasswordHashConfig {
    PasswordHashConfig {
        memory_kib: 256,
        iterations: 1,
        parallelism: 1,
    }
}

pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(&fast_hash_config()).unwrap()
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret_key: "test-signing-secret".to_string(),
        algorithm: "HS256".to_string(),
        access_token_expire_minutes: 30,
        password_hash: fast_hash_config(),
    }
}

pub fn test_tokens() -> TokenService {
    TokenService::new(&test_auth_config()).unwrap()
}

pub fn registration(username: &str, email: &str, password: &str) -> RegisterUser {
    RegisterUser {
        email: email.to_string(),
        username: username.to_string(),
        full_name: format!("{username} tester"),
        role: UserRole::Patient,
        is_active: true,
        password: password.to_string(),
    }
}
