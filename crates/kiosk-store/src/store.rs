//! # Order Store
//!
//! Single source of truth for the user's in-progress order.
//!
//! ## Thread Safety
//! State is wrapped in `Mutex` because:
//! 1. Multiple handles (view callbacks, the loader, the submit task) may
//!    touch the store
//! 2. Only one mutation should run at a time
//! 3. The lock is never held across an await point
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Store Operations                               │
//! │                                                                         │
//! │  User Action            Store Operation         State Change            │
//! │  ───────────            ───────────────         ────────────            │
//! │                                                                         │
//! │  Add to Order ─────────► add_line() ──────────► lines.push(line)       │
//! │                          add_from_menu()        (validated variant)     │
//! │                                                                         │
//! │  Click Remove ─────────► remove_line() ───────► lines.remove(i)        │
//! │                                                  + removal toast        │
//! │                                                                         │
//! │  Submit Order ─────────► submit_order() ──────► Idle → Submitting      │
//! │                             │ await kitchen       │                     │
//! │                             ▼                     ▼                     │
//! │                          ok: clear lines       Submitting → Idle       │
//! │                          err: keep lines       + success/error toast   │
//! │                                                                         │
//! │  EVERY mutation republishes an OrderSnapshot on the watch channel,     │
//! │  so observers see updated state at their next read.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared-Responsibility Boundaries (documented, not enforced)
//! - `add_line` does not re-validate the item/option pairing against the
//!   menu, and does not require the menu to be loaded. Callers that want
//!   validation use `add_from_menu`.
//! - Re-entrant `submit_order` calls are not guarded here; the view layer
//!   disables the submit trigger while `is_submitting` is true.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use kiosk_core::{CoreResult, Menu, MenuOption, Money, Order, OrderError, OrderLine};

use crate::kitchen::{Kitchen, SimulatedKitchen};
use crate::notify::Notifier;

/// How long the success toast stays on screen after a submission.
const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(5);

// =============================================================================
// Order Snapshot
// =============================================================================

/// A read-only snapshot of store state for the view layer.
///
/// Published on the watch channel after every mutation; also available
/// on demand via [`OrderStore::snapshot`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    /// Order lines in insertion order.
    pub lines: Vec<OrderLine>,

    /// True while a submission is in flight.
    pub is_submitting: bool,

    /// True until the menu has been delivered.
    pub is_loading: bool,

    /// Order total in cents (sum of line prices, 0 when empty).
    pub total_cents: i64,
}

// =============================================================================
// Order Store
// =============================================================================

/// Everything behind the store's single lock.
#[derive(Debug)]
struct StoreInner {
    order: Order,
    is_submitting: bool,
    menu: Option<Menu>,
}

/// The order state container.
///
/// Owns the order exclusively; the view layer holds snapshots and calls
/// these operations. Shareable across tasks (`Arc<OrderStore>`).
pub struct OrderStore {
    inner: Mutex<StoreInner>,
    kitchen: Arc<dyn Kitchen>,
    notifier: Notifier,
    snapshot_tx: watch::Sender<OrderSnapshot>,
}

impl OrderStore {
    /// Creates a store backed by the reference kitchen (2.5 s simulated
    /// submission that always succeeds).
    pub fn new() -> Self {
        OrderStore::with_kitchen(Arc::new(SimulatedKitchen::default()))
    }

    /// Creates a store with an injected kitchen (tests, real transports).
    pub fn with_kitchen(kitchen: Arc<dyn Kitchen>) -> Self {
        let inner = StoreInner {
            order: Order::new(),
            is_submitting: false,
            menu: None,
        };
        let (snapshot_tx, _) = watch::channel(Self::snapshot_of(&inner));

        OrderStore {
            inner: Mutex::new(inner),
            kitchen,
            notifier: Notifier::new(),
            snapshot_tx,
        }
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Subscribes to state snapshots (publish-on-mutate).
    pub fn subscribe(&self) -> watch::Receiver<OrderSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Returns the current state snapshot.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// The notification channel handle (removal/submission toasts).
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// True until the menu has been delivered.
    pub fn is_loading(&self) -> bool {
        self.lock().menu.is_none()
    }

    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting
    }

    /// The delivered menu, if any.
    pub fn menu(&self) -> Option<Menu> {
        self.lock().menu.clone()
    }

    /// Calculates the current order total.
    pub fn total(&self) -> Money {
        self.lock().order.total()
    }

    /// Number of lines in the order.
    pub fn line_count(&self) -> usize {
        self.lock().order.len()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Installs the delivered menu. One-time transition: `is_loading` is
    /// false for the rest of the session.
    pub fn set_menu(&self, menu: Menu) {
        info!(items = menu.len(), "menu delivered");
        let mut inner = self.lock();
        inner.menu = Some(menu);
        self.publish(&inner);
    }

    /// Adds a line to the order and returns its uid.
    ///
    /// Infallible by contract: the pairing is the caller's responsibility
    /// and the menu does not need to be loaded (the view layer blocks adds
    /// while loading; the store does not).
    pub fn add_line(&self, item_name: impl Into<String>, option: MenuOption) -> String {
        let item_name = item_name.into();
        debug!(item = %item_name, size = %option.size, "add_line");

        let mut inner = self.lock();
        let uid = inner.order.add_line(item_name, option).uid.clone();
        self.publish(&inner);
        uid
    }

    /// Validated add: resolves the item/size pairing against the delivered
    /// menu before creating the line.
    pub fn add_from_menu(&self, item: &str, size: &str) -> CoreResult<String> {
        let option = {
            let inner = self.lock();
            let menu = inner.menu.as_ref().ok_or(OrderError::MenuNotLoaded)?;
            menu.option_for(item, size)?.clone()
        };
        Ok(self.add_line(item, option))
    }

    /// Removes a line by uid.
    ///
    /// Found: the line is removed (relative order of the rest preserved)
    /// and the user gets a removal toast. Not found: benign no-op, logged
    /// as a diagnostic, no state change, no user-visible error.
    pub fn remove_line(&self, uid: &str) {
        let removed = {
            let mut inner = self.lock();
            let removed = inner.order.remove_line(uid);
            if removed.is_some() {
                self.publish(&inner);
            }
            removed
        };

        match removed {
            Some(line) => {
                debug!(%uid, item = %line.item_name, "remove_line");
                self.notifier
                    .info(format!("{} was removed from your order.", line.item_name));
            }
            None => debug!(%uid, "remove_line: uid not found in order"),
        }
    }

    /// Submits the order to the kitchen.
    ///
    /// ## State Machine
    /// `Idle → Submitting → Idle`, lines cleared on the way back when the
    /// kitchen accepts. On failure the lines are preserved so the user can
    /// retry, and a distinct error toast is shown.
    ///
    /// Errors are absorbed here - nothing propagates to the caller beyond
    /// the snapshot and notification channels.
    pub async fn submit_order(&self) {
        let lines = {
            let mut inner = self.lock();
            inner.is_submitting = true;
            self.publish(&inner);
            inner.order.lines.clone()
        };

        debug!(lines = lines.len(), "submit_order: sending to kitchen");
        self.notifier.dismiss_all();

        match self.kitchen.submit(&lines).await {
            Ok(()) => {
                {
                    let mut inner = self.lock();
                    inner.order.clear();
                    inner.is_submitting = false;
                    self.publish(&inner);
                }
                info!("order submitted to the kitchen");
                self.notifier.success(
                    "Your order was submitted to the kitchen!",
                    SUCCESS_TOAST_DURATION,
                );
            }
            Err(err) => {
                {
                    let mut inner = self.lock();
                    // Lines preserved for retry
                    inner.is_submitting = false;
                    self.publish(&inner);
                }
                warn!(error = %err, "submit_order: kitchen submission failed");
                self.notifier
                    .error("Your order could not be submitted. Please try again.");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("order store mutex poisoned")
    }

    fn snapshot_of(inner: &StoreInner) -> OrderSnapshot {
        OrderSnapshot {
            lines: inner.order.lines.clone(),
            is_submitting: inner.is_submitting,
            is_loading: inner.menu.is_none(),
            total_cents: inner.order.total().cents(),
        }
    }

    fn publish(&self, inner: &StoreInner) {
        self.snapshot_tx.send_replace(Self::snapshot_of(inner));
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::KitchenError;
    use crate::notify::{NotificationKind, NotifierEvent};
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    fn option(size: &str, price_cents: i64) -> MenuOption {
        MenuOption {
            size: size.to_string(),
            price_cents,
        }
    }

    fn instant_store() -> OrderStore {
        OrderStore::with_kitchen(Arc::new(SimulatedKitchen::instant()))
    }

    /// A kitchen that always refuses, to exercise the failure branch.
    struct BrokenKitchen;

    #[async_trait]
    impl Kitchen for BrokenKitchen {
        async fn submit(&self, _lines: &[OrderLine]) -> Result<(), KitchenError> {
            Err(KitchenError::Unreachable)
        }
    }

    /// A kitchen that holds the submission until the test releases it,
    /// making the Submitting phase observable deterministically.
    struct GatedKitchen {
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl Kitchen for GatedKitchen {
        async fn submit(&self, _lines: &[OrderLine]) -> Result<(), KitchenError> {
            let _permit = self.gate.acquire().await.expect("gate closed");
            Ok(())
        }
    }

    #[test]
    fn test_add_and_total() {
        let store = instant_store();

        store.add_line("Fries", option("small", 99));
        assert_eq!(store.total().cents(), 99);

        store.add_line("Fries", option("regular", 150));
        assert_eq!(store.total().cents(), 249);
        assert_eq!(store.line_count(), 2);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.total_cents, 249);
        assert_eq!(snapshot.lines.len(), 2);
    }

    #[test]
    fn test_store_accepts_adds_before_menu_delivery() {
        // The store itself does not require menu presence to add lines;
        // blocking adds while loading is the view layer's job.
        let store = instant_store();
        assert!(store.is_loading());

        store.add_line("Fries", option("small", 99));
        assert_eq!(store.line_count(), 1);
        assert!(store.is_loading());
    }

    #[test]
    fn test_remove_line_notifies() {
        let store = instant_store();
        let mut notifications = store.notifier().subscribe();

        let uid = store.add_line("Fries", option("small", 99));
        store.add_line("Fries", option("regular", 150));
        store.remove_line(&uid);

        assert_eq!(store.line_count(), 1);
        assert_eq!(store.total().cents(), 150);

        match notifications.try_recv().unwrap() {
            NotifierEvent::Show(n) => {
                assert_eq!(n.kind, NotificationKind::Info);
                assert_eq!(n.message, "Fries was removed from your order.");
            }
            other => panic!("expected removal toast, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_unknown_uid_is_silent_noop() {
        let store = instant_store();
        let mut notifications = store.notifier().subscribe();

        store.add_line("Fries", option("small", 99));
        store.remove_line("no-such-uid");

        // No state change, no user-visible notification
        assert_eq!(store.line_count(), 1);
        assert_eq!(store.total().cents(), 99);
        assert!(notifications.try_recv().is_err());
    }

    #[test]
    fn test_add_from_menu() {
        let store = instant_store();

        // Before delivery: validated path refuses
        assert!(matches!(
            store.add_from_menu("Fries", "small"),
            Err(OrderError::MenuNotLoaded)
        ));

        let menu = Menu::from_document(
            r#"{"menu":[{"item":"Fries","options":[{"size":"small","price":0.99}]}]}"#,
        )
        .unwrap()
        .unwrap();
        store.set_menu(menu);
        assert!(!store.is_loading());

        store.add_from_menu("Fries", "small").unwrap();
        assert_eq!(store.total().cents(), 99);

        assert!(matches!(
            store.add_from_menu("Fries", "jumbo"),
            Err(OrderError::UnknownOption { .. })
        ));
        assert!(matches!(
            store.add_from_menu("Burger", "small"),
            Err(OrderError::UnknownMenuItem { .. })
        ));
        // Failed validation left the order untouched
        assert_eq!(store.line_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_clears_order_and_notifies_success() {
        let store = instant_store();
        let mut notifications = store.notifier().subscribe();

        store.add_line("Fries", option("small", 99));
        store.submit_order().await;

        let snapshot = store.snapshot();
        assert!(!snapshot.is_submitting);
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.total_cents, 0);

        // Pending toasts dismissed first, then the success toast
        assert_eq!(notifications.try_recv().unwrap(), NotifierEvent::DismissAll);
        match notifications.try_recv().unwrap() {
            NotifierEvent::Show(n) => {
                assert_eq!(n.kind, NotificationKind::Success);
                assert_eq!(n.message, "Your order was submitted to the kitchen!");
                assert_eq!(n.duration, Some(Duration::from_secs(5)));
            }
            other => panic!("expected success toast, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submitting_phase_is_observable() {
        let gate = Arc::new(Semaphore::new(0));
        let store = Arc::new(OrderStore::with_kitchen(Arc::new(GatedKitchen {
            gate: gate.clone(),
        })));
        let mut snapshots = store.subscribe();

        store.add_line("Fries", option("small", 99));

        let submit = tokio::spawn({
            let store = store.clone();
            async move { store.submit_order().await }
        });

        // Phase 1: is_submitting flips immediately, lines unchanged
        snapshots
            .wait_for(|s| s.is_submitting)
            .await
            .expect("store dropped");
        let mid = store.snapshot();
        assert!(mid.is_submitting);
        assert_eq!(mid.lines.len(), 1);

        // Phase 2: release the kitchen, submission completes
        gate.add_permits(1);
        submit.await.unwrap();

        let done = store.snapshot();
        assert!(!done.is_submitting);
        assert!(done.lines.is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_lines() {
        let store = OrderStore::with_kitchen(Arc::new(BrokenKitchen));
        let mut notifications = store.notifier().subscribe();

        store.add_line("Fries", option("small", 99));
        store.add_line("Fries", option("regular", 150));
        store.submit_order().await;

        // Back to idle with the order intact
        let snapshot = store.snapshot();
        assert!(!snapshot.is_submitting);
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.total_cents, 249);

        assert_eq!(notifications.try_recv().unwrap(), NotifierEvent::DismissAll);
        match notifications.try_recv().unwrap() {
            NotifierEvent::Show(n) => {
                assert_eq!(n.kind, NotificationKind::Error);
            }
            other => panic!("expected error toast, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_empty_order_is_allowed() {
        // No precondition enforced; the view layer disables this path.
        let store = instant_store();
        store.submit_order().await;

        let snapshot = store.snapshot();
        assert!(!snapshot.is_submitting);
        assert!(snapshot.lines.is_empty());
    }

    #[test]
    fn test_snapshot_observer_sees_every_mutation() {
        let store = instant_store();
        let snapshots = store.subscribe();

        let uid = store.add_line("Fries", option("small", 99));
        assert_eq!(snapshots.borrow().total_cents, 99);

        store.remove_line(&uid);
        assert_eq!(snapshots.borrow().total_cents, 0);
        assert!(snapshots.borrow().lines.is_empty());
    }
}
