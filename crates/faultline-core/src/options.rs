//! Caller-supplied hints for classification
//!
//! Every field is optional. Empty strings count as "not supplied"
//! throughout the precedence chains, so a hint can never blank out a
//! default.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Hints accompanying a raw error into classification
///
/// Explicit hints take precedence over anything read from the raw
/// error; see the individual builders for the exact chains.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Override for the record name
    pub name: Option<String>,
    /// Explicit status, `0` included
    pub status: Option<i64>,
    /// Override for the summary line
    pub message: Option<String>,
    /// Override for the longer description
    pub description: Option<String>,
    /// Payload passed through to the record
    pub data: Option<Map<String, Value>>,
    /// Field errors, pre-normalization (label to string or sequence)
    pub error_fields: Option<IndexMap<String, Value>>,
}

impl Options {
    /// Hints with every field unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A string hint counts only when present and non-empty
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}
