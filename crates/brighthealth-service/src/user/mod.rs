//! User record management.

pub mod service;

pub use service::{USER_NOT_FOUND, UserService};
