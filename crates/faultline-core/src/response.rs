//! HTTP-response-shaped classification
//!
//! A status in `[100, 600)` selects one of five status classes, each
//! carrying its own default texts. The status itself resolves with the
//! generic precedence first (hint over raw), and an out-of-range result
//! degrades to the generic builder, the escape hatch for zero and other
//! non-HTTP values.

use jiff::Timestamp;
use serde_json::Value;

use crate::generic;
use crate::options::{self, Options};
use crate::record::{self, ErrorRecord, Kind};
use crate::resolve::resolve;

/// The five closed-open status ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum StatusClass {
    /// `[100, 200)`
    Informational,
    /// `[200, 300)`
    Success,
    /// `[300, 400)`
    Redirection,
    /// `[400, 500)`
    Client,
    /// `[500, 600)`
    Server,
}

impl StatusClass {
    /// Class for a status, `None` outside `[100, 600)`
    #[must_use]
    pub const fn from_status(status: i64) -> Option<Self> {
        match status {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::Client),
            500..=599 => Some(Self::Server),
            _ => None,
        }
    }

    /// Default machine name for the class
    #[must_use]
    pub fn default_name(self) -> &'static str {
        self.into()
    }

    /// Default summary for the class
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Informational => "Informational error has occurred in the app.",
            Self::Success => "Great!",
            Self::Redirection => "Oops. Redirection error has occurred in the app.",
            Self::Client => "Oops. Wrong data goes from the client side.",
            Self::Server => "Oops. Wrong data goes from the server side.",
        }
    }

    /// Default description for the class
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Success => "All data was saved!",
            _ => generic::GENERIC_DESCRIPTION,
        }
    }
}

/// Whether a raw error plus hints looks HTTP-response-shaped
///
/// True iff the explicit status hint or the raw error's `status` field
/// is an integer in `[100, 600)`.
#[must_use]
pub fn looks_like_response_error(raw: &Value, options: &Options) -> bool {
    options.status.is_some_and(in_range) || raw_status(raw).is_some_and(in_range)
}

/// HTTP-status interpretation; degrades to generic out of range
pub(crate) fn build(markers: &[String], raw: &Value, options: &Options) -> ErrorRecord {
    let status = generic::resolve_status(raw, options);
    let Some(class) = StatusClass::from_status(status) else {
        return generic::build(markers, raw, options);
    };

    ErrorRecord {
        kind: Kind::Response,
        name: generic::resolve_name_or(markers, raw, options, class.default_name()),
        status,
        message: options::non_empty(options.message.as_ref())
            .map_or_else(|| class.default_message().to_owned(), ToOwned::to_owned),
        description: generic::resolve_description_or(markers, raw, options, class.default_description()),
        data: generic::resolve_data(options),
        error: raw.clone(),
        error_fields: None,
        trace: record::capture_trace(),
        created: Timestamp::now(),
    }
}

fn raw_status(raw: &Value) -> Option<i64> {
    resolve(raw, "status").and_then(Value::as_i64)
}

const fn in_range(status: i64) -> bool {
    StatusClass::from_status(status).is_some()
}
