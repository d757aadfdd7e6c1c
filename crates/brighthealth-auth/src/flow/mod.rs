//! Credential checks, token issuance, and registration.

pub mod authenticator;

pub use authenticator::{AccessToken, AuthenticationFlow};
