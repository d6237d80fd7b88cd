//! Protective call wrapper
//!
//! Runs a fallible operation and hands any failure to classification,
//! so callers receive either the untouched success value or exactly one
//! structured record. The record comes back as the `Err` arm: propagate
//! it with `?` or inspect it in place, whichever the call site needs.

use std::panic::{self, AssertUnwindSafe};

use faultline_core::{Classifier, ErrorRecord, Notify, Options};
use serde_json::{Value, json};

/// Conversion from an operation's error type into a raw error value
///
/// The engine takes raw errors as `serde_json::Value`; this is the
/// ingestion seam for everything else an operation may fail with.
pub trait IntoRawError {
    /// The raw value handed to classification
    fn into_raw_error(self) -> Value;
}

impl IntoRawError for Value {
    fn into_raw_error(self) -> Value {
        self
    }
}

impl IntoRawError for String {
    fn into_raw_error(self) -> Value {
        Value::String(self)
    }
}

impl IntoRawError for &str {
    fn into_raw_error(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoRawError for anyhow::Error {
    fn into_raw_error(self) -> Value {
        json!({ "message": format!("{self:#}") })
    }
}

/// Raw error value for an arbitrary error type
///
/// For error types without an [`IntoRawError`] conversion of their own:
/// the display form lands in the raw `message` field, which feeds the
/// description chain during classification.
#[must_use]
pub fn raw_from_error(error: &dyn std::error::Error) -> Value {
    json!({ "message": error.to_string() })
}

/// Wrapper behavior switches
#[derive(Clone, Default)]
pub struct AttemptOptions<'a> {
    /// Suppress the wrapper's diagnostic log line
    pub quiet: bool,
    /// Observer broadcast to for every constructed record
    pub observer: Option<&'a dyn Notify>,
    /// Hints forwarded into classification
    pub hints: Options,
}

/// Run an operation, classifying its failure
///
/// A success value passes through untouched and no record is
/// constructed.
///
/// # Errors
///
/// The operation's error, classified into an [`ErrorRecord`].
pub fn attempt<T, E, F>(
    operation: F,
    classifier: &Classifier,
    options: &AttemptOptions<'_>,
) -> Result<T, Box<ErrorRecord>>
where
    F: FnOnce() -> Result<T, E>,
    E: IntoRawError,
{
    operation().map_err(|error| classify_failure(&error.into_raw_error(), classifier, options))
}

/// Run an operation, classifying both its failure and any panic
///
/// String panic payloads become string-shaped raw errors; anything else
/// classifies as a bare generic record.
///
/// # Errors
///
/// The operation's error or panic payload, classified into an
/// [`ErrorRecord`].
pub fn attempt_catching<T, E, F>(
    operation: F,
    classifier: &Classifier,
    options: &AttemptOptions<'_>,
) -> Result<T, Box<ErrorRecord>>
where
    F: FnOnce() -> Result<T, E>,
    E: IntoRawError,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(outcome) => {
            outcome.map_err(|error| classify_failure(&error.into_raw_error(), classifier, options))
        }
        Err(payload) => Err(classify_failure(&panic_payload(payload), classifier, options)),
    }
}

fn panic_payload(payload: Box<dyn std::any::Any + Send>) -> Value {
    match payload.downcast::<String>() {
        Ok(text) => Value::String(*text),
        Err(payload) => payload
            .downcast::<&str>()
            .map_or(Value::Null, |text| Value::String((*text).to_owned())),
    }
}

fn classify_failure(
    raw: &Value,
    classifier: &Classifier,
    options: &AttemptOptions<'_>,
) -> Box<ErrorRecord> {
    let record = match options.observer {
        Some(observer) => classifier.classify_and_notify(raw, &options.hints, observer),
        None => classifier.classify(raw, &options.hints),
    };
    if !options.quiet {
        tracing::warn!(
            name = %record.name,
            status = record.status,
            kind = %record.kind,
            "caught: {}",
            record.message
        );
    }
    Box::new(record)
}
