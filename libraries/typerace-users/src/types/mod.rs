//! User record types and their identifier

mod header;
mod ids;
mod user;

pub use header::{UserRequestHeader, UserRole};
pub use ids::UserId;
pub use user::{CreateUserRequest, UpdateUserRequest, User};
