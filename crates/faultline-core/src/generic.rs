//! Generic error configuration: the base precedence rules
//!
//! Every classification bottoms out here. Status, name, message, and
//! description resolve through fixed first-non-empty-wins chains over
//! the caller hints and the raw error, so the resulting record is
//! always fully populated no matter how malformed the input is.

use jiff::Timestamp;
use serde_json::{Map, Value};

use crate::options::{self, Options};
use crate::record::{self, ErrorRecord, Kind};
use crate::resolve::resolve_or;

/// Default machine name for unclassified errors
pub const GENERIC_NAME: &str = "DevError";

/// Default summary when nothing more specific resolves
pub const GENERIC_MESSAGE: &str = "Sorry! Error has occurred in the app.";

/// Default description when nothing more specific resolves
pub const GENERIC_DESCRIPTION: &str =
    "This feature probably does not work properly. Please, notify us and we'll fix it.";

/// Machine name assigned when an offline marker fires
pub const CONNECTION_NAME: &str = "ConnectionError";

/// Summary assigned when an offline marker fires
pub const OFFLINE_MESSAGE: &str = "You have no internet connection.";

/// Description assigned when an offline marker fires
pub const OFFLINE_DESCRIPTION: &str = "Make sure you are online.";

/// The raw-error message recognized as lost connectivity by default
///
/// Matches the browser fetch failure verbatim; the classifier accepts
/// additional markers for other runtimes.
pub const DEFAULT_OFFLINE_MARKER: &str = "Failed to fetch";

/// Base record, no HTTP or validation interpretation
pub(crate) fn build(markers: &[String], raw: &Value, options: &Options) -> ErrorRecord {
    ErrorRecord {
        kind: Kind::Generic,
        name: resolve_name_or(markers, raw, options, GENERIC_NAME),
        status: resolve_status(raw, options),
        message: resolve_message_or(markers, raw, options, GENERIC_MESSAGE),
        description: resolve_description_or(markers, raw, options, GENERIC_DESCRIPTION),
        data: resolve_data(options),
        error: raw.clone(),
        error_fields: None,
        trace: record::capture_trace(),
        created: Timestamp::now(),
    }
}

/// Status chain: explicit hint (zero included), raw `status`, then zero
pub(crate) fn resolve_status(raw: &Value, options: &Options) -> i64 {
    options.status.unwrap_or_else(|| resolve_or(raw, "status", 0))
}

/// Name chain: offline marker, name hint, raw `name`, then the default
pub(crate) fn resolve_name_or(markers: &[String], raw: &Value, options: &Options, default: &str) -> String {
    if is_offline(markers, raw) {
        return CONNECTION_NAME.to_owned();
    }
    supplied_name(raw, options).unwrap_or_else(|| default.to_owned())
}

/// Message chain: string-shaped raw error, message hint, offline
/// marker, interpolated supplied name, then the default
pub(crate) fn resolve_message_or(markers: &[String], raw: &Value, options: &Options, default: &str) -> String {
    if let Some(text) = raw.as_str().filter(|text| !text.is_empty()) {
        return text.to_owned();
    }
    if let Some(hint) = options::non_empty(options.message.as_ref()) {
        return hint.to_owned();
    }
    if is_offline(markers, raw) {
        return OFFLINE_MESSAGE.to_owned();
    }
    if let Some(name) = supplied_name(raw, options) {
        return format!("Sorry! {} has occurred in the app.", record::spaced(&name));
    }
    default.to_owned()
}

/// Description chain: description hint, offline marker, interpolated
/// raw message, then the default
pub(crate) fn resolve_description_or(markers: &[String], raw: &Value, options: &Options, default: &str) -> String {
    if let Some(hint) = options::non_empty(options.description.as_ref()) {
        return hint.to_owned();
    }
    if is_offline(markers, raw) {
        return OFFLINE_DESCRIPTION.to_owned();
    }
    let message = raw_message(raw);
    if message.is_empty() {
        default.to_owned()
    } else {
        format!(
            "This feature probably does not work properly, cause of in-app error: \"{message}\".\nPlease, notify us and we'll fix it."
        )
    }
}

/// Payload passthrough, defaulting to an empty mapping
pub(crate) fn resolve_data(options: &Options) -> Map<String, Value> {
    options.data.clone().unwrap_or_default()
}

/// Whether the raw error's message equals a configured offline marker
pub(crate) fn is_offline(markers: &[String], raw: &Value) -> bool {
    let message = raw_message(raw);
    !message.is_empty() && markers.iter().any(|marker| *marker == message)
}

/// The raw error's `message` field, empty when absent or not a string
fn raw_message(raw: &Value) -> String {
    resolve_or(raw, "message", String::new())
}

/// Name hint or the raw error's `name` field, empty strings excluded
fn supplied_name(raw: &Value, options: &Options) -> Option<String> {
    if let Some(hint) = options::non_empty(options.name.as_ref()) {
        return Some(hint.to_owned());
    }
    let name = resolve_or(raw, "name", String::new());
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn markers() -> Vec<String> {
        vec![DEFAULT_OFFLINE_MARKER.to_owned()]
    }

    #[test]
    fn bare_object_gets_every_default() {
        let record = build(&markers(), &json!({}), &Options::new());
        assert_eq!(record.kind, Kind::Generic);
        assert_eq!(record.name, GENERIC_NAME);
        assert_eq!(record.status, 0);
        assert_eq!(record.message, GENERIC_MESSAGE);
        assert_eq!(record.description, GENERIC_DESCRIPTION);
        assert!(record.data.is_empty());
        assert!(record.error_fields.is_none());
    }

    #[test]
    fn non_object_raws_never_fail() {
        for raw in [json!(null), json!(17), json!(true), json!([1, 2])] {
            let record = build(&markers(), &raw, &Options::new());
            assert!(!record.message.is_empty());
            assert!(!record.description.is_empty());
            assert_eq!(record.status, 0);
            assert_eq!(record.error, raw);
        }
    }

    #[test]
    fn string_raw_error_becomes_the_message() {
        let record = build(&markers(), &json!("disk is full"), &Options::new());
        assert_eq!(record.message, "disk is full");
        assert_eq!(record.name, GENERIC_NAME);
    }

    #[test]
    fn message_hint_beats_raw_name_interpolation() {
        let options = Options {
            message: Some("custom summary".to_owned()),
            ..Options::default()
        };
        let record = build(&markers(), &json!({ "name": "TypeError" }), &options);
        assert_eq!(record.message, "custom summary");
    }

    #[test]
    fn raw_name_interpolates_with_spaces() {
        let record = build(&markers(), &json!({ "name": "TypeError" }), &Options::new());
        assert_eq!(record.name, "TypeError");
        assert_eq!(record.message, "Sorry! Type Error has occurred in the app.");
    }

    #[test]
    fn raw_message_interpolates_into_description() {
        let record = build(&markers(), &json!({ "message": "boom" }), &Options::new());
        assert_eq!(
            record.description,
            "This feature probably does not work properly, cause of in-app error: \"boom\".\nPlease, notify us and we'll fix it."
        );
    }

    #[test]
    fn offline_marker_rewrites_name_message_description() {
        let record = build(&markers(), &json!({ "message": "Failed to fetch" }), &Options::new());
        assert_eq!(record.name, CONNECTION_NAME);
        assert_eq!(record.message, OFFLINE_MESSAGE);
        assert_eq!(record.description, OFFLINE_DESCRIPTION);
    }

    #[test]
    fn offline_marker_yields_to_explicit_hints() {
        let options = Options {
            message: Some("still broken".to_owned()),
            description: Some("told you".to_owned()),
            ..Options::default()
        };
        let record = build(&markers(), &json!({ "message": "Failed to fetch" }), &options);
        assert_eq!(record.message, "still broken");
        assert_eq!(record.description, "told you");
        // the name chain puts the marker first
        assert_eq!(record.name, CONNECTION_NAME);
    }

    #[test]
    fn explicit_zero_status_wins_over_raw() {
        let options = Options {
            status: Some(0),
            ..Options::default()
        };
        let record = build(&markers(), &json!({ "status": 404 }), &options);
        assert_eq!(record.status, 0);
    }

    #[test]
    fn raw_status_applies_when_unhinted() {
        let record = build(&markers(), &json!({ "status": 404 }), &Options::new());
        assert_eq!(record.status, 404);
    }

    #[test]
    fn wrong_shape_raw_status_is_ignored() {
        let record = build(&markers(), &json!({ "status": "404" }), &Options::new());
        assert_eq!(record.status, 0);
    }

    #[test]
    fn data_passes_through() {
        let mut data = Map::new();
        data.insert("attempt".to_owned(), json!(3));
        let options = Options {
            data: Some(data.clone()),
            ..Options::default()
        };
        let record = build(&markers(), &json!({}), &options);
        assert_eq!(record.data, data);
    }

    #[test]
    fn empty_string_hints_behave_as_unset() {
        let options = Options {
            name: Some(String::new()),
            message: Some(String::new()),
            ..Options::default()
        };
        let record = build(&markers(), &json!({}), &options);
        assert_eq!(record.name, GENERIC_NAME);
        assert_eq!(record.message, GENERIC_MESSAGE);
    }
}
