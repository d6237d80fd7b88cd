//! Structured error records
//!
//! One record type covers all three classification kinds as a closed
//! tagged union: the `kind` discriminant selects Generic, Response, or
//! Validation, and `error_fields` is populated exactly for Validation
//! records. Records are constructed fresh per raw error and treated as
//! immutable afterwards.

use std::backtrace::{Backtrace, BacktraceStatus};

use indexmap::IndexMap;
use jiff::Timestamp;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered mapping from field label to its non-empty error messages
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Which classification produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    /// Unclassifiable or dev-only errors
    Generic,
    /// HTTP-status-shaped errors
    Response,
    /// Field-level form errors
    Validation,
}

impl Kind {
    /// Base label for the kind
    ///
    /// The notification contract broadcasts on a named channel only when
    /// a record's name differs from this label.
    #[must_use]
    pub const fn base_label(self) -> &'static str {
        match self {
            Self::Generic => "DevError",
            Self::Response => "ResponseError",
            Self::Validation => "ValidationError",
        }
    }
}

/// A raw error normalized into consistent, typed fields
///
/// `message` and `description` are never empty; `status` is `0` unless
/// an HTTP-like status was supplied; `error` carries the raw value
/// untouched. Implements [`std::error::Error`], displaying `message`,
/// so a record can ride ordinary `?` propagation.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ErrorRecord {
    /// Classification that produced this record
    pub kind: Kind,
    /// Machine-readable label, no spaces
    pub name: String,
    /// HTTP-like status, `0` when not HTTP-classified
    pub status: i64,
    /// Single-line human-readable summary
    pub message: String,
    /// Longer explanation, possibly multi-line
    pub description: String,
    /// Caller-supplied payload, passed through untouched
    pub data: Map<String, Value>,
    /// The original raw error value
    pub error: Value,
    /// Normalized field errors, present exactly for Validation records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fields: Option<FieldErrors>,
    /// Best-effort backtrace captured at construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// UTC instant of construction
    pub created: Timestamp,
}

impl ErrorRecord {
    /// Display form of the machine name, with a space inserted before
    /// each uppercase letter (`ConnectionError` → `Connection Error`)
    ///
    /// Used for message interpolation only; the stored `name` keeps the
    /// machine form.
    #[must_use]
    pub fn display_name(&self) -> String {
        spaced(&self.name)
    }
}

/// Insert a space before every uppercase letter and trim the ends
pub(crate) fn spaced(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_owned()
}

/// Capture a backtrace when the platform and environment enable it
///
/// Enrichment only: records are complete without it.
pub(crate) fn capture_trace() -> Option<String> {
    let backtrace = Backtrace::capture();
    (backtrace.status() == BacktraceStatus::Captured).then(|| backtrace.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_inserts_before_each_uppercase() {
        assert_eq!(spaced("ConnectionError"), "Connection Error");
        assert_eq!(spaced("DevError"), "Dev Error");
        assert_eq!(spaced("Server"), "Server");
        assert_eq!(spaced("already spaced"), "already spaced");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn base_labels_match_kind() {
        assert_eq!(Kind::Generic.base_label(), "DevError");
        assert_eq!(Kind::Response.base_label(), "ResponseError");
        assert_eq!(Kind::Validation.base_label(), "ValidationError");
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(serde_json::to_value(Kind::Generic).unwrap(), "generic");
        assert_eq!(serde_json::to_value(Kind::Validation).unwrap(), "validation");
        assert_eq!(Kind::Response.to_string(), "response");
    }
}
