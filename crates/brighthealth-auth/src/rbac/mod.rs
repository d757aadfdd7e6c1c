//! Role-based access policy for user records.

pub mod policy;

pub use policy::{AccessPolicy, NOT_ENOUGH_PERMISSIONS, UserAction};
