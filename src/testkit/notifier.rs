//! Recording [`StatusNotifier`] implementation for testing.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::port::notifier::{StatusEvent, StatusNotifier};

/// A notifier that records every event it receives.
///
/// Clones share the underlying log, so a test can register one copy in a
/// [`NotifierRegistry`](crate::port::notifier::NotifierRegistry) and keep
/// another to assert on.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<StatusEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event received so far, in order.
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().clone()
    }

    /// Only the failure messages, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                StatusEvent::ActionFailed { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// How many pending events were received.
    pub fn pending_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, StatusEvent::TransactionPending))
            .count()
    }

    /// The success events received, as `(message, reload_required)` pairs.
    pub fn successes(&self) -> Vec<(String, bool)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                StatusEvent::ActionSucceeded {
                    message,
                    reload_required,
                } => Some((message.clone(), *reload_required)),
                _ => None,
            })
            .collect()
    }
}

impl StatusNotifier for RecordingNotifier {
    fn notify(&self, event: StatusEvent) {
        self.events.lock().push(event);
    }
}
