//! User domain entities.

pub mod model;
pub mod role;

pub use model::{NewUser, RegisterUser, User, UserChanges, UserPatch};
pub use role::UserRole;
