//! # Notifier
//!
//! Transient user feedback (toasts) as a broadcast channel.
//!
//! ## Why a Channel?
//! The store must never call into the view layer directly. It publishes
//! notification events; whatever renders toasts subscribes and displays
//! them. Dropping every receiver simply makes sends no-ops, which keeps the
//! store usable headless (tests, the demo binary before a subscriber
//! attaches).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderStore ──► Notifier ──► broadcast ──► toast renderer(s)           │
//! │                                                                         │
//! │  remove_line    Show(Info,    "Fries was removed from your order.")    │
//! │  submit start   DismissAll                                              │
//! │  submit ok      Show(Success, "Your order was submitted...", 5s)       │
//! │  submit fail    Show(Error,   "We couldn't reach the kitchen...")      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;

/// How many unread events a slow subscriber may lag behind by.
const CHANNEL_CAPACITY: usize = 32;

/// Severity of a notification, mapped to toast styling by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A single transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,

    pub message: String,

    /// How long the toast should stay visible; `None` means the view
    /// layer's default.
    pub duration: Option<Duration>,
}

/// Events on the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "payload")]
pub enum NotifierEvent {
    /// Display a new toast.
    Show(Notification),

    /// Dismiss everything currently on screen (start of submission).
    DismissAll,
}

/// Publish-side handle for user notifications.
///
/// Cheap to clone; all clones feed the same subscribers.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<NotifierEvent>,
}

impl Notifier {
    /// Creates a notifier with no subscribers yet.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Notifier { tx }
    }

    /// Subscribes to the notification stream.
    pub fn subscribe(&self) -> broadcast::Receiver<NotifierEvent> {
        self.tx.subscribe()
    }

    /// Shows an informational toast with the view layer's default duration.
    pub fn info(&self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message, None);
    }

    /// Shows a success toast that stays visible for `duration`.
    pub fn success(&self, message: impl Into<String>, duration: Duration) {
        self.show(NotificationKind::Success, message, Some(duration));
    }

    /// Shows an error toast with the view layer's default duration.
    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message, None);
    }

    /// Dismisses all pending toasts.
    pub fn dismiss_all(&self) {
        // No subscribers is fine - nothing to dismiss anywhere
        let _ = self.tx.send(NotifierEvent::DismissAll);
    }

    fn show(&self, kind: NotificationKind, message: impl Into<String>, duration: Option<Duration>) {
        let _ = self.tx.send(NotifierEvent::Show(Notification {
            kind,
            message: message.into(),
            duration,
        }));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_reach_subscriber() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.info("Fries was removed from your order.");
        notifier.dismiss_all();
        notifier.success("Your order was submitted to the kitchen!", Duration::from_secs(5));

        match rx.try_recv().unwrap() {
            NotifierEvent::Show(n) => {
                assert_eq!(n.kind, NotificationKind::Info);
                assert_eq!(n.message, "Fries was removed from your order.");
                assert_eq!(n.duration, None);
            }
            other => panic!("expected Show, got {:?}", other),
        }

        assert_eq!(rx.try_recv().unwrap(), NotifierEvent::DismissAll);

        match rx.try_recv().unwrap() {
            NotifierEvent::Show(n) => {
                assert_eq!(n.kind, NotificationKind::Success);
                assert_eq!(n.duration, Some(Duration::from_secs(5)));
            }
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_send_without_subscribers_is_noop() {
        let notifier = Notifier::new();
        // Must not panic or error
        notifier.info("nobody listening");
        notifier.dismiss_all();
    }
}
