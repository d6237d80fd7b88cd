//! Field-validation classification
//!
//! Field errors arrive as a label-to-value mapping where each value may
//! be a single string or a sequence of mixed entries. Normalization
//! keeps only non-empty strings, preserves label order, and drops
//! labels whose entries all washed out. A raw error without any usable
//! field degrades to the generic builder.

use itertools::Itertools;
use jiff::Timestamp;
use serde_json::Value;

use crate::generic;
use crate::options::{self, Options};
use crate::record::{self, ErrorRecord, FieldErrors, Kind};

/// Default machine name for field-validation errors
pub const VALIDATION_NAME: &str = "ValidationError";

/// Default summary for field-validation errors
pub const VALIDATION_MESSAGE: &str = "Oops. Wrong form data.";

const DESCRIPTION_HEADER: &str = "Provide correct data to next invalid fields, please:\n";

/// Whether a raw error plus hints carries at least one usable field error
///
/// A field counts only when its value is a non-empty string or a
/// sequence containing at least one non-empty string.
#[must_use]
pub fn looks_like_validation_error(raw: &Value, options: &Options) -> bool {
    !source_fields(raw, options).is_empty()
}

/// Normalize a label-to-value mapping into label-to-messages
///
/// Scalars are wrapped into one-element sequences; entries that are not
/// non-empty strings are dropped; labels with nothing left are omitted
/// entirely. Label order is preserved.
#[must_use]
pub fn normalize_fields<'a, I>(entries: I) -> FieldErrors
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    let mut fields = FieldErrors::new();
    for (label, value) in entries {
        let messages: Vec<String> = match value {
            Value::Array(items) => items.iter().filter_map(as_message).collect(),
            scalar => as_message(scalar).into_iter().collect(),
        };
        if !messages.is_empty() {
            fields.insert(label.clone(), messages);
        }
    }
    fields
}

/// Field-validation interpretation; degrades to generic without usable fields
pub(crate) fn build(markers: &[String], raw: &Value, options: &Options) -> ErrorRecord {
    let fields = source_fields(raw, options);
    if fields.is_empty() {
        return generic::build(markers, raw, options);
    }

    let description = options::non_empty(options.description.as_ref())
        .map_or_else(|| describe_fields(&fields), ToOwned::to_owned);

    ErrorRecord {
        kind: Kind::Validation,
        name: generic::resolve_name_or(markers, raw, options, VALIDATION_NAME),
        status: generic::resolve_status(raw, options),
        message: options::non_empty(options.message.as_ref())
            .map_or_else(|| VALIDATION_MESSAGE.to_owned(), ToOwned::to_owned),
        description,
        data: generic::resolve_data(options),
        error: raw.clone(),
        error_fields: Some(fields),
        trace: record::capture_trace(),
        created: Timestamp::now(),
    }
}

/// Pick the normalized source mapping: the hint map when it normalizes
/// to something, else the raw error's `errorFields`; never merged
fn source_fields(raw: &Value, options: &Options) -> FieldErrors {
    if let Some(hinted) = &options.error_fields {
        let normalized = normalize_fields(hinted);
        if !normalized.is_empty() {
            return normalized;
        }
    }
    raw.get("errorFields")
        .and_then(Value::as_object)
        .map_or_else(FieldErrors::new, normalize_fields)
}

/// Tab-indented per-field listing under the fixed header
fn describe_fields(fields: &FieldErrors) -> String {
    let listing = fields
        .iter()
        .map(|(label, messages)| format!("{label}:\n\t{}", messages.iter().join("\n\t")))
        .join("\n");
    format!("{DESCRIPTION_HEADER}{listing}")
}

fn as_message(value: &Value) -> Option<String> {
    value.as_str().filter(|text| !text.is_empty()).map(ToOwned::to_owned)
}
