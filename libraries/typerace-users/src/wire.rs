//! JSON wire representation of the user records
//!
//! Every record encodes as a flat JSON object whose keys are listed by its
//! [`WireRecord`] impl. Unknown keys are ignored on input; missing required
//! keys or mistyped values fail with [`UserRecordError::Decode`].

use crate::error::{Result, UserRecordError};
use crate::types::{CreateUserRequest, UpdateUserRequest, User, UserRequestHeader};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A record with a documented wire shape
pub trait WireRecord: Serialize + DeserializeOwned {
    /// Record name used in error messages
    const RECORD: &'static str;

    /// Keys always present in the encoded object
    const WIRE_KEYS: &'static [&'static str];

    /// Keys present only when the corresponding field is set
    const OPTIONAL_KEYS: &'static [&'static str] = &[];

    /// Extra keys accepted on input in place of a wire key
    const ALIASES: &'static [&'static str] = &[];
}

impl WireRecord for CreateUserRequest {
    const RECORD: &'static str = "CreateUserRequest";
    const WIRE_KEYS: &'static [&'static str] = &["username", "email"];
}

impl WireRecord for UserRequestHeader {
    const RECORD: &'static str = "UserRequestHeader";
    const WIRE_KEYS: &'static [&'static str] =
        &["id", "username", "email", "image_url", "expair_at"];
    const OPTIONAL_KEYS: &'static [&'static str] = &["role"];
    const ALIASES: &'static [&'static str] = &["expires_at"];
}

impl WireRecord for User {
    const RECORD: &'static str = "User";
    const WIRE_KEYS: &'static [&'static str] = &[
        "id",
        "username",
        "email",
        "image_url",
        "created_at",
        "updated_at",
    ];
}

impl WireRecord for UpdateUserRequest {
    const RECORD: &'static str = "UpdateUserRequest";
    const WIRE_KEYS: &'static [&'static str] = &[];
    const OPTIONAL_KEYS: &'static [&'static str] = &["username", "email", "image_url"];
}

/// Encode a record as compact JSON
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(UserRecordError::Encode)
}

/// Encode a record as indented JSON
pub fn to_json_pretty<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(UserRecordError::Encode)
}

/// Encode a record as a JSON value
pub fn to_json_value<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(UserRecordError::Encode)
}

/// Decode a record from a JSON string
pub fn from_json<T: WireRecord>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(|e| decode_error::<T>(&e))
}

/// Decode a record from JSON bytes
pub fn from_slice<T: WireRecord>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(|e| decode_error::<T>(&e))
}

/// Decode a record from an already parsed JSON value
pub fn from_value<T: WireRecord>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| decode_error::<T>(&e))
}

fn decode_error<T: WireRecord>(err: &serde_json::Error) -> UserRecordError {
    tracing::debug!(record = T::RECORD, error = %err, "failed to decode record");
    UserRecordError::decode(T::RECORD, err)
}

/// Keys of a JSON object that `T` does not define
///
/// These are dropped silently on decode. Returns an empty list for
/// non-object values.
pub fn unknown_keys<T: WireRecord>(value: &Value) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return Vec::new();
    };
    object
        .keys()
        .filter(|key| !is_known_key::<T>(key))
        .cloned()
        .collect()
}

fn is_known_key<T: WireRecord>(key: &str) -> bool {
    T::WIRE_KEYS.contains(&key) || T::OPTIONAL_KEYS.contains(&key) || T::ALIASES.contains(&key)
}

/// Record kinds addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `CreateUserRequest`
    CreateUser,
    /// `UserRequestHeader`
    Header,
    /// `User`
    User,
    /// `UpdateUserRequest`
    UpdateUser,
}

impl RecordKind {
    /// All kinds, in documentation order
    pub const ALL: [Self; 4] = [Self::CreateUser, Self::Header, Self::User, Self::UpdateUser];

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateUser => "create-user",
            Self::Header => "header",
            Self::User => "user",
            Self::UpdateUser => "update-user",
        }
    }

    /// Record name of this kind
    pub fn record_name(&self) -> &'static str {
        match self {
            Self::CreateUser => CreateUserRequest::RECORD,
            Self::Header => UserRequestHeader::RECORD,
            Self::User => User::RECORD,
            Self::UpdateUser => UpdateUserRequest::RECORD,
        }
    }

    /// Keys always present in the encoded object
    pub fn wire_keys(&self) -> &'static [&'static str] {
        match self {
            Self::CreateUser => CreateUserRequest::WIRE_KEYS,
            Self::Header => UserRequestHeader::WIRE_KEYS,
            Self::User => User::WIRE_KEYS,
            Self::UpdateUser => UpdateUserRequest::WIRE_KEYS,
        }
    }

    /// Keys present only when set
    pub fn optional_keys(&self) -> &'static [&'static str] {
        match self {
            Self::CreateUser => CreateUserRequest::OPTIONAL_KEYS,
            Self::Header => UserRequestHeader::OPTIONAL_KEYS,
            Self::User => User::OPTIONAL_KEYS,
            Self::UpdateUser => UpdateUserRequest::OPTIONAL_KEYS,
        }
    }

    /// Keys of `value` this kind does not define
    pub fn unknown_keys(&self, value: &Value) -> Vec<String> {
        match self {
            Self::CreateUser => unknown_keys::<CreateUserRequest>(value),
            Self::Header => unknown_keys::<UserRequestHeader>(value),
            Self::User => unknown_keys::<User>(value),
            Self::UpdateUser => unknown_keys::<UpdateUserRequest>(value),
        }
    }

    /// Decode `input` as this kind and re-encode it as indented JSON
    ///
    /// Unknown keys are dropped and `expires_at` is rewritten to `expair_at`.
    pub fn canonicalize(&self, input: &str) -> Result<String> {
        match self {
            Self::CreateUser => to_json_pretty(&from_json::<CreateUserRequest>(input)?),
            Self::Header => to_json_pretty(&from_json::<UserRequestHeader>(input)?),
            Self::User => to_json_pretty(&from_json::<User>(input)?),
            Self::UpdateUser => to_json_pretty(&from_json::<UpdateUserRequest>(input)?),
        }
    }
}

impl FromStr for RecordKind {
    type Err = UserRecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UserRecordError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
