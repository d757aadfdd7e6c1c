//! Bearer token to user resolution.

pub mod resolver;

pub use resolver::{INACTIVE_USER, INVALID_TOKEN, SessionResolver};
