//! # kiosk-store: Order State Container
//!
//! Stateful layer above `kiosk-core`: owns the in-progress order, feeds
//! observers, and simulates the asynchronous boundaries (menu delivery,
//! kitchen submission).
//!
//! ## Module Organization
//! ```text
//! kiosk_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── OrderStore: mutations, snapshots, submission
//! ├── loader.rs       ◄─── Delayed one-time menu delivery
//! ├── notify.rs       ◄─── Toast notification channel
//! ├── kitchen.rs      ◄─── Submission seam + simulated kitchen
//! └── bin/demo.rs     ◄─── End-to-end dev harness
//! ```
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuLoader ──delay──► OrderStore ◄──add/remove/submit── View Layer    │
//! │                            │                                            │
//! │                            ├──► watch::channel(OrderSnapshot)           │
//! │                            ├──► broadcast::channel(NotifierEvent)       │
//! │                            └──► Kitchen::submit(...)  (async seam)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All errors stop at this layer: unknown uids are logged no-ops, kitchen
//! failures become error toasts with the order preserved. The view layer
//! only ever sees snapshots and notifications.

mod kitchen;
mod loader;
mod notify;
mod store;

pub use kitchen::{Kitchen, KitchenError, SimulatedKitchen};
pub use loader::MenuLoader;
pub use notify::{Notification, NotificationKind, Notifier, NotifierEvent};
pub use store::{OrderSnapshot, OrderStore};
