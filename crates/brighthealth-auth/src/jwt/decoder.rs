//! Signed token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use super::claims::Claims;

/// Validates JWT signatures and expiry.
///
/// Expiry is checked against a caller-supplied time rather than by
/// `jsonwebtoken`, so there is no leeway and tests can move the clock.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature and claim-presence rules.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder for the given secret and algorithm.
    pub fn new(secret: &str, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decodes `token` and checks it is unexpired at `now`.
    ///
    /// Returns `None` for a bad signature, a different algorithm, a
    /// malformed payload, or `exp <= now`.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(error = %e, "Rejected access token");
                return None;
            }
        };

        if claims.is_expired_at(now) {
            debug!(expires_at = ?claims.expires_at(), "Rejected expired access token");
            return None;
        }

        Some(claims)
    }
}
