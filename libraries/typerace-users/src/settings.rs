//! Settings for evaluating request headers against the wall clock
//!
//! Loaded from an optional TOML file and `TYPERACE_`-prefixed environment
//! variables, e.g. `TYPERACE_HEADER__EXPIRY_UNIT=milliseconds`.

use crate::error::{Result, UserRecordError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TYPERACE";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Request header evaluation
    #[serde(default)]
    pub header: HeaderSettings,
}

/// How `expair_at` is interpreted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderSettings {
    /// Epoch unit of the expiry timestamp
    #[serde(default = "default_expiry_unit")]
    pub expiry_unit: ExpiryUnit,

    /// Tolerance in `expiry_unit` granted past the expiry instant
    #[serde(default = "default_leeway")]
    pub leeway: i64,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            expiry_unit: default_expiry_unit(),
            leeway: default_leeway(),
        }
    }
}

impl HeaderSettings {
    /// Current time in `expiry_unit`, shifted back by the leeway
    pub fn effective_now(&self) -> i64 {
        self.effective_at(self.expiry_unit.now())
    }

    /// `now` shifted back by the leeway
    pub fn effective_at(&self, now: i64) -> i64 {
        now.saturating_sub(self.leeway)
    }
}

/// Epoch unit of header expiry timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUnit {
    /// Seconds since the Unix epoch
    Seconds,
    /// Milliseconds since the Unix epoch
    Milliseconds,
}

impl ExpiryUnit {
    /// Current wall-clock time in this unit
    pub fn now(self) -> i64 {
        let now = Utc::now();
        match self {
            Self::Seconds => now.timestamp(),
            Self::Milliseconds => now.timestamp_millis(),
        }
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the environment
    ///
    /// A file passed explicitly must exist. Environment variables override
    /// values from the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;

        tracing::info!(
            expiry_unit = settings.header.expiry_unit.as_str(),
            leeway = settings.header.leeway,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.header.leeway < 0 {
            return Err(UserRecordError::config(format!(
                "header.leeway must not be negative (got {})",
                self.header.leeway
            )));
        }
        Ok(())
    }
}

// Default values
fn default_expiry_unit() -> ExpiryUnit {
    ExpiryUnit::Seconds
}

fn default_leeway() -> i64 {
    0
}
