//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder signing key used when none is configured.
pub const DEFAULT_SECRET_KEY: &str = "CHANGE_ME_IN_PRODUCTION";

/// Token signing and credential hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Signing algorithm identifier: `"HS256"`, `"HS384"` or `"HS512"`.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_expire_minutes: u64,
    /// Password hashing cost parameters.
    #[serde(default)]
    pub password_hash: PasswordHashConfig,
}

/// Argon2id cost parameters used for new password hashes.
///
/// Existing hashes always verify with the parameters embedded in them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl AuthConfig {
    /// Returns the access token lifetime.
    ///
    /// Fails when the configured minutes do not fit in a whole number of
    /// seconds.
    pub fn access_token_ttl(&self) -> Result<Duration, AppError> {
        self.access_token_expire_minutes
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "access_token_expire_minutes is out of range: {}",
                    self.access_token_expire_minutes
                ))
            })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            algorithm: default_algorithm(),
            access_token_expire_minutes: default_access_ttl(),
            password_hash: PasswordHashConfig::default(),
        }
    }
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_memory_kib() -> u32 {
    19456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_access_token_ttl_in_seconds() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl().unwrap(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_access_token_ttl_overflow_is_configuration_error() {
        let config = AuthConfig {
            access_token_expire_minutes: u64::MAX / 30,
            ..Default::default()
        };
        let err = config.access_token_ttl().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
