//! User entity and the payloads that create and mutate it

use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data for creating a new user
///
/// Carries no identifier; the persistence layer assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Requested username
    pub username: String,

    /// Contact email
    pub email: String,
}

impl CreateUserRequest {
    /// Create a request from its two fields
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, immutable once assigned
    pub id: UserId,

    /// Username, unique across the system
    pub username: String,

    /// Email, unique across the system
    pub email: String,

    /// Profile image reference (empty when unset)
    pub image_url: String,

    /// Account creation timestamp (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp (RFC 3339, UTC)
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a freshly created user from a creation request
    ///
    /// Both timestamps are set to `now` and the image reference starts empty.
    pub fn new(id: UserId, request: CreateUserRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: request.username,
            email: request.email,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update
    ///
    /// Only the fields present in `update` are written. `created_at` is never
    /// touched and `updated_at` never moves backwards, even if `now` is older
    /// than the stored value. Returns `true` if any field changed.
    pub fn apply_update(&mut self, update: UpdateUserRequest, now: DateTime<Utc>) -> bool {
        let mut changed = false;

        if let Some(username) = update.username {
            changed |= replace_if_different(&mut self.username, username);
        }
        if let Some(email) = update.email {
            changed |= replace_if_different(&mut self.email, email);
        }
        if let Some(image_url) = update.image_url {
            changed |= replace_if_different(&mut self.image_url, image_url);
        }

        if changed {
            self.touch(now);
        }
        changed
    }

    /// Record a mutation at `now`, keeping `updated_at` monotonic
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Whether a profile image has been set
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

fn replace_if_different(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Partial profile update
///
/// Absent fields are left as they are and are omitted from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// New email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New profile image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UpdateUserRequest {
    /// Set the new username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the new email
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the new profile image reference
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether the update carries no fields
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.image_url.is_none()
    }
}
