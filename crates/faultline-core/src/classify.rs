//! Classification dispatch
//!
//! One classifier value holds the offline-marker configuration and runs
//! the fixed-priority decision: response-shaped first, then validation,
//! then generic. The ordering is deliberate: a raw error carrying both
//! an in-range status and usable field errors classifies as Response.

use serde::Deserialize;
use serde_json::Value;

use crate::generic;
use crate::notify::Notify;
use crate::options::Options;
use crate::record::ErrorRecord;
use crate::response;
use crate::validation;

/// Classifier configuration
///
/// Deserializable so embedders can drive it from their own config
/// files. The defaults reproduce the stock classifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Raw-error messages treated as lost connectivity
    pub offline_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            offline_markers: vec![generic::DEFAULT_OFFLINE_MARKER.to_owned()],
        }
    }
}

/// The classification engine
///
/// Holds no mutable state: every call is independent, so a single
/// classifier can be shared by reference across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    offline_markers: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(ClassifierConfig::default())
    }
}

impl Classifier {
    /// Classifier with the default offline marker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier from configuration
    #[must_use]
    pub fn from_config(config: ClassifierConfig) -> Self {
        Self {
            offline_markers: config.offline_markers,
        }
    }

    /// Add a raw-error message recognized as lost connectivity
    #[must_use]
    pub fn with_offline_marker(mut self, marker: impl Into<String>) -> Self {
        self.offline_markers.push(marker.into());
        self
    }

    /// Run the fixed-priority classification
    ///
    /// Exactly one record is produced per raw error: response-shaped
    /// errors win over validation-shaped ones, and anything else is
    /// generic.
    #[must_use]
    pub fn classify(&self, raw: &Value, options: &Options) -> ErrorRecord {
        if response::looks_like_response_error(raw, options) {
            self.response(raw, options)
        } else if validation::looks_like_validation_error(raw, options) {
            self.validation(raw, options)
        } else {
            self.generic(raw, options)
        }
    }

    /// Classify, then broadcast the record to the observer
    ///
    /// The observer hears the record on its name as the channel when
    /// that name differs from the kind's base label, then once more on
    /// the catch-all channel.
    #[must_use = "the record is the classification result; the broadcast is a side channel"]
    pub fn classify_and_notify(&self, raw: &Value, options: &Options, observer: &dyn Notify) -> ErrorRecord {
        let record = self.classify(raw, options);
        if record.name != record.kind.base_label() {
            observer.notify(&record, Some(&record.name));
        }
        observer.notify(&record, None);
        record
    }

    /// Base record, no HTTP or validation interpretation
    #[must_use]
    pub fn generic(&self, raw: &Value, options: &Options) -> ErrorRecord {
        generic::build(&self.offline_markers, raw, options)
    }

    /// HTTP-status interpretation; degrades to generic out of range
    #[must_use]
    pub fn response(&self, raw: &Value, options: &Options) -> ErrorRecord {
        response::build(&self.offline_markers, raw, options)
    }

    /// Field-validation interpretation; degrades to generic without
    /// usable fields
    #[must_use]
    pub fn validation(&self, raw: &Value, options: &Options) -> ErrorRecord {
        validation::build(&self.offline_markers, raw, options)
    }
}
