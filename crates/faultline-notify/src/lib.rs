//! Subscriber registry for constructed error records
//!
//! Implements the core `Notify` contract: records fan out to
//! subscribers registered on a specific channel (a record's kind name)
//! and to catch-all subscribers. The registry is an explicit value the
//! embedder creates at startup and drops at shutdown. Registration
//! happens during setup; fan-out is read-only.

use std::collections::HashMap;
use std::sync::Arc;

use faultline_core::{ErrorRecord, Notify};

/// Receiver of broadcast records
pub trait Subscriber: Send + Sync {
    /// Handle one record
    fn on_record(&self, record: &ErrorRecord);
}

/// Explicit registry of subscribers
#[derive(Default)]
pub struct Registry {
    catch_all: Vec<Arc<dyn Subscriber>>,
    channels: HashMap<String, Vec<Arc<dyn Subscriber>>>,
}

impl Registry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every broadcast record
    pub fn subscribe(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.catch_all.push(subscriber);
    }

    /// Subscribe to records broadcast on a specific channel
    ///
    /// Channels carry a record's name (e.g. `Server`, `ConnectionError`)
    /// whenever it differs from the kind's base label.
    pub fn subscribe_channel(&mut self, channel: impl Into<String>, subscriber: Arc<dyn Subscriber>) {
        self.channels.entry(channel.into()).or_default().push(subscriber);
    }
}

impl Notify for Registry {
    fn notify(&self, record: &ErrorRecord, channel: Option<&str>) {
        match channel {
            Some(name) => {
                if let Some(subscribers) = self.channels.get(name) {
                    for subscriber in subscribers {
                        subscriber.on_record(record);
                    }
                }
            }
            None => {
                for subscriber in &self.catch_all {
                    subscriber.on_record(record);
                }
            }
        }
    }
}

/// Subscriber that logs records through `tracing`
///
/// Server-range statuses log at error level, everything else at warn.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubscriber;

impl Subscriber for LogSubscriber {
    fn on_record(&self, record: &ErrorRecord) {
        if (500..600).contains(&record.status) {
            tracing::error!(
                name = %record.name,
                status = record.status,
                kind = %record.kind,
                "{}",
                record.message
            );
        } else {
            tracing::warn!(
                name = %record.name,
                status = record.status,
                kind = %record.kind,
                "{}",
                record.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use faultline_core::{Classifier, Options};
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Subscriber for Counter {
        fn on_record(&self, _record: &ErrorRecord) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn catch_all_hears_every_record() {
        let counter = Arc::new(Counter::default());
        let mut registry = Registry::new();
        registry.subscribe(counter.clone());

        let classifier = Classifier::new();
        let _server = classifier.classify_and_notify(&json!({ "status": 500 }), &Options::new(), &registry);
        let _generic = classifier.classify_and_notify(&json!({}), &Options::new(), &registry);

        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn channel_subscribers_hear_only_their_channel() {
        let server = Arc::new(Counter::default());
        let validation = Arc::new(Counter::default());
        let mut registry = Registry::new();
        registry.subscribe_channel("Server", server.clone());
        registry.subscribe_channel("ValidationError", validation.clone());

        let classifier = Classifier::new();
        let record = classifier.classify_and_notify(&json!({ "status": 503 }), &Options::new(), &registry);
        assert_eq!(record.name, "Server");

        assert_eq!(server.0.load(Ordering::SeqCst), 1);
        assert_eq!(validation.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn base_label_records_skip_named_channels() {
        let named = Arc::new(Counter::default());
        let mut registry = Registry::new();
        registry.subscribe_channel("DevError", named.clone());

        // generic record keeps the base label, so no named broadcast happens
        let _record = Classifier::new().classify_and_notify(&json!({}), &Options::new(), &registry);

        assert_eq!(named.0.load(Ordering::SeqCst), 0);
    }
}
