//! # brighthealth-service
//!
//! Business logic service layer for Bright Health. Each service checks the
//! caller against the access policy before touching the user directory.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod user;

pub use user::UserService;
