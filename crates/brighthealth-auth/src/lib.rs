//! # brighthealth-auth
//!
//! Authentication and authorization for the Bright Health service.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: signed bearer token issuance and verification
//! - `flow`: login and registration against the user directory
//! - `session`: bearer token to current user resolution
//! - `rbac`: role and ownership access policy

pub mod flow;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

#[cfg(test)]
mod testing;

pub use flow::{AccessToken, AuthenticationFlow};
pub use jwt::{Claims, IssuedToken, TokenService};
pub use password::PasswordHasher;
pub use rbac::{AccessPolicy, UserAction};
pub use session::SessionResolver;
