//! Status notification port for user-facing feedback.
//!
//! The engine reports three things: a transaction entered flight, an action
//! settled successfully, or an action failed with a message. How those are
//! rendered (toast, banner, log line) is the host's business.

/// Canonical text for a successful settlement.
pub const TRANSACTION_SUCCESS: &str = "Transaction Successful";

/// Events that can trigger notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// A transaction was submitted and awaits its receipt.
    TransactionPending,
    /// A trade or approval settled successfully.
    ActionSucceeded {
        /// Text to display.
        message: String,
        /// Whether dependent views must reload their data.
        reload_required: bool,
    },
    /// A user-visible failure with presentable text.
    ActionFailed {
        /// Text to display.
        message: String,
    },
}

/// Trait for notification handlers.
///
/// Implement this trait to receive status events from the engine.
/// Notifications are fire-and-forget.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
pub trait StatusNotifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: StatusEvent);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers and offers the three
/// reporting shortcuts the engine uses.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn StatusNotifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn StatusNotifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: StatusEvent) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Announce a transaction entering flight.
    pub fn report_pending(&self) {
        self.notify_all(StatusEvent::TransactionPending);
    }

    /// Announce a successful settlement.
    pub fn report_success(&self, reload_required: bool) {
        self.notify_all(StatusEvent::ActionSucceeded {
            message: TRANSACTION_SUCCESS.to_string(),
            reload_required,
        });
    }

    /// Announce a failure with presentable text.
    pub fn report_error(&self, message: impl Into<String>) {
        self.notify_all(StatusEvent::ActionFailed {
            message: message.into(),
        });
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl StatusNotifier for NullNotifier {
    fn notify(&self, _event: StatusEvent) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl StatusNotifier for LogNotifier {
    fn notify(&self, event: StatusEvent) {
        use tracing::info;
        match event {
            StatusEvent::TransactionPending => {
                info!("Transaction pending");
            }
            StatusEvent::ActionSucceeded {
                message,
                reload_required,
            } => {
                info!(
                    message = %message,
                    reload_required,
                    "Action succeeded"
                );
            }
            StatusEvent::ActionFailed { message } => {
                info!(message = %message, "Action failed");
            }
        }
    }
}
