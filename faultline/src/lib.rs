//! Structured classification for arbitrary error values
//!
//! Embeddable facade over the engine (`faultline-core`) and the
//! subscriber registry (`faultline-notify`): wrap unstable operations
//! with [`attempt`] and branch on the [`Kind`] of the record you get
//! back instead of probing ad-hoc error shapes.
//!
//! ```
//! use faultline::{AttemptOptions, Classifier, Kind, attempt};
//! use serde_json::json;
//!
//! let classifier = Classifier::new();
//! let options = AttemptOptions {
//!     quiet: true,
//!     ..AttemptOptions::default()
//! };
//!
//! let record = attempt(|| Err::<(), _>(json!({ "status": 503 })), &classifier, &options)
//!     .unwrap_err();
//! assert_eq!(record.kind, Kind::Response);
//! assert_eq!(record.name, "Server");
//!
//! let value = attempt(|| Ok::<_, String>(42), &classifier, &options);
//! assert_eq!(value.unwrap(), 42);
//! ```

mod attempt;

pub use attempt::{AttemptOptions, IntoRawError, attempt, attempt_catching, raw_from_error};
pub use faultline_core::{
    Classifier, ClassifierConfig, ErrorRecord, FieldErrors, Kind, Notify, Options, StatusClass,
    looks_like_response_error, looks_like_validation_error,
};
pub use faultline_notify::{LogSubscriber, Registry, Subscriber};
