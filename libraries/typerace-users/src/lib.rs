//! Typerace Users
//!
//! Wire-level user records shared between the Typerace backend and its
//! clients.
//!
//! # Architecture
//!
//! The crate defines:
//! - **Records**: `CreateUserRequest`, `UserRequestHeader`, `User`, `UpdateUserRequest`
//! - **Wire helpers**: JSON encode/decode with typed errors and the documented key sets
//! - **Settings**: how header expiry is evaluated against the wall clock
//! - **Error Handling**: unified `UserRecordError` and `Result` types
//!
//! Persistence, HTTP routing and token issuance live outside this crate; the
//! records here are what those layers pass around.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use typerace_users::{CreateUserRequest, User, UserId, UserRequestHeader};
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! let request = CreateUserRequest::new("alice", "alice@example.com");
//! let user = User::new(UserId::new(1), request, now);
//! assert_eq!(user.image_url, "");
//!
//! let header = UserRequestHeader::for_user(&user, now.timestamp() + 3600);
//! assert!(header.is_valid_at(now.timestamp()));
//!
//! let json = typerace_users::wire::to_json(&header).unwrap();
//! assert!(json.contains("\"expair_at\""));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;
pub mod types;
pub mod wire;

// Re-export commonly used types
pub use error::{Result, UserRecordError};
pub use settings::{ExpiryUnit, HeaderSettings, Settings};
pub use types::{
    CreateUserRequest, UpdateUserRequest, User, UserId, UserRequestHeader, UserRole,
};
pub use wire::{RecordKind, WireRecord};
