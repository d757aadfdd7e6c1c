//! Issue and verify bearer tokens with the process-wide signing settings.

use std::time::Duration;

use chrono::{DateTime, Utc};

use brighthealth_core::config::AuthConfig;
use brighthealth_core::error::AppError;

use super::algorithm::parse_algorithm;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};

/// Stateless token issuance and verification.
///
/// Holds only the immutable key material, so a single instance can be
/// shared across every request without locking.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Builds the service from auth configuration.
    ///
    /// Fails when the configured algorithm is not an HMAC algorithm or the
    /// configured token lifetime cannot be represented.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.algorithm)?;
        if config.secret_key.is_empty() {
            return Err(AppError::configuration("Token signing key must not be empty"));
        }
        let ttl = config.access_token_ttl()?;
        let representable = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some();
        if !representable {
            return Err(AppError::configuration(format!(
                "access_token_expire_minutes is out of range: {}",
                config.access_token_expire_minutes
            )));
        }

        Ok(Self {
            encoder: JwtEncoder::new(&config.secret_key, algorithm),
            decoder: JwtDecoder::new(&config.secret_key, algorithm),
        })
    }

    /// Issues a token for `subject` valid for `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issues a token for `subject` valid for `ttl` from `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.encode_at(subject, ttl, now)
    }

    /// Returns the token's subject if it verifies now.
    pub fn verify(&self, token: &str) -> Option<String> {
        self.verify_at(token, Utc::now())
    }

    /// Returns the token's subject if it verifies at `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<String> {
        self.decoder.decode_at(token, now).map(|claims| claims.sub)
    }
}
