//! Authenticated request header
//!
//! Derived, time-bounded claims about a user, attached to a request context
//! by the authentication layer. Never persisted and possibly stale relative
//! to the stored [`User`].

use super::ids::UserId;
use super::user::User;
use crate::error::{Result, UserRecordError};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization role carried by a request header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Regular player
    Member,
}

impl UserRole {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl FromStr for UserRole {
    type Err = UserRecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(UserRecordError::Decode {
                record: "UserRole",
                message: format!("unknown role `{other}`"),
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Claims about the authenticated user of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequestHeader {
    /// User the header was issued for
    pub id: UserId,

    /// Username at issue time
    pub username: String,

    /// Email at issue time
    pub email: String,

    /// Profile image reference at issue time
    pub image_url: String,

    /// Expiry instant as an epoch timestamp
    ///
    /// Existing clients read and write this under the `expair_at` key, so it
    /// is emitted that way; `expires_at` is accepted on input too.
    #[serde(rename = "expair_at", alias = "expires_at")]
    pub expires_at: i64,

    /// Optional role, omitted from the wire form when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl UserRequestHeader {
    /// Copy the current profile values of `user` into a header
    pub fn for_user(user: &User, expires_at: i64) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            image_url: user.image_url.clone(),
            expires_at,
            role: None,
        }
    }

    /// Attach a role
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Whether the header has expired at `now`
    ///
    /// `now` must use the same epoch unit as `expires_at`. The expiry instant
    /// itself already counts as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Whether the header is still valid at `now`
    pub fn is_valid_at(&self, now: i64) -> bool {
        !self.is_expired_at(now)
    }

    /// Reject the header if it has expired at `now`
    pub fn ensure_valid_at(&self, now: i64) -> Result<()> {
        if self.is_expired_at(now) {
            tracing::debug!(
                user_id = %self.id,
                expires_at = self.expires_at,
                now,
                "request header expired"
            );
            return Err(UserRecordError::Expired {
                id: self.id,
                expires_at: self.expires_at,
                now,
            });
        }
        Ok(())
    }

    /// Whether the header has expired according to the wall clock
    pub fn is_expired(&self, settings: &Settings) -> bool {
        self.is_expired_at(settings.header.effective_now())
    }

    /// Reject the header if it has expired according to the wall clock
    pub fn ensure_valid(&self, settings: &Settings) -> Result<()> {
        self.ensure_valid_at(settings.header.effective_now())
    }
}
