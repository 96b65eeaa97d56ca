//! Subcommand implementations

use anyhow::Context;
use serde_json::Value;
use std::fmt;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;
use typerace_users::{wire, RecordKind, Settings, UserRequestHeader};

/// Read a document from `path`, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Decode `input` as `kind` and return its canonical encoding
pub fn canonical(kind: RecordKind, input: &str) -> anyhow::Result<String> {
    if let Ok(value) = serde_json::from_str::<Value>(input) {
        let unknown = kind.unknown_keys(&value);
        if !unknown.is_empty() {
            tracing::warn!(kind = %kind, keys = ?unknown, "dropping unknown keys");
        }
    }

    kind.canonicalize(input)
        .with_context(|| format!("Input is not a valid {}", kind.record_name()))
}

/// Render the wire keys of `kind`, one per line
pub fn keys(kind: RecordKind) -> String {
    let mut out = String::new();
    for key in kind.wire_keys() {
        let _ = writeln!(out, "{}", key);
    }
    for key in kind.optional_keys() {
        let _ = writeln!(out, "{} (optional)", key);
    }
    out
}

/// Outcome of a header expiry check
#[derive(Debug)]
pub struct HeaderReport {
    pub header: UserRequestHeader,
    pub now: i64,
    pub expired: bool,
}

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.expired { "expired" } else { "valid" };
        write!(
            f,
            "{}: user {} ({}) expair_at={} now={}",
            status, self.header.id, self.header.username, self.header.expires_at, self.now
        )
    }
}

/// Decode a header and evaluate it at `now`
///
/// An explicit `now` is used as given. Without one the wall clock is read and
/// shifted back by the configured leeway.
pub fn check_header(
    input: &str,
    now: Option<i64>,
    settings: &Settings,
) -> anyhow::Result<HeaderReport> {
    let header: UserRequestHeader =
        wire::from_json(input).context("Input is not a valid UserRequestHeader")?;

    let (now, effective) = match now {
        Some(now) => (now, now),
        None => {
            let now = settings.header.expiry_unit.now();
            (now, settings.header.effective_at(now))
        }
    };
    let expired = header.is_expired_at(effective);

    tracing::info!(
        user_id = %header.id,
        expires_at = header.expires_at,
        now,
        expired,
        "checked request header"
    );

    Ok(HeaderReport {
        header,
        now,
        expired,
    })
}
