//! Parsing of the configured signing algorithm.

use jsonwebtoken::Algorithm;

use brighthealth_core::error::AppError;

/// Maps a configured algorithm identifier to a shared-secret JWT algorithm.
///
/// Only HMAC algorithms are accepted, since the signing key is a secret string.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported token signing algorithm '{other}'. Expected one of: HS256, HS384, HS512"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hmac_algorithms() {
        assert_eq!(parse_algorithm("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(parse_algorithm("hs384").unwrap(), Algorithm::HS384);
        assert_eq!(parse_algorithm(" HS512 ").unwrap(), Algorithm::HS512);
    }

    #[test]
    fn test_rejects_asymmetric_and_unknown() {
        assert!(parse_algorithm("RS256").is_err());
        assert!(parse_algorithm("none").is_err());
        assert!(parse_algorithm("").is_err());
    }
}
