//! # Demo Session
//!
//! Runs one full ordering session against the store, end to end, with
//! shortened delays. Useful for eyeballing the snapshot and notification
//! streams without a view layer attached.
//!
//! ## Usage
//! ```bash
//! cargo run -p kiosk-store --bin demo
//!
//! # Verbose store logging
//! RUST_LOG=debug cargo run -p kiosk-store --bin demo
//! ```
//!
//! ## Session Script
//! 1. Start the loader with a 200 ms simulated network delay
//! 2. Add small + regular Fries and a Burger once the menu lands
//! 3. Remove the small Fries line
//! 4. Submit (400 ms simulated kitchen) and print the toast stream

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_store::{MenuLoader, NotifierEvent, OrderStore, SimulatedKitchen};

/// Menu document in the shape the loader consumes.
const MENU_DOC: &str = r#"{
    "menu": [
        {
            "item": "Fries",
            "options": [
                { "size": "small",   "price": 0.99 },
                { "size": "regular", "price": 1.50 },
                { "size": "large",   "price": 1.99 }
            ]
        },
        {
            "item": "Burger",
            "options": [
                { "size": "single",  "price": 4.99 },
                { "size": "double",  "price": 6.49 }
            ]
        },
        {
            "item": "Soda",
            "options": [
                { "size": "small",   "price": 1.00 },
                { "size": "regular", "price": 1.50 },
                { "size": "large",   "price": 2.00 }
            ]
        }
    ]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let store = Arc::new(OrderStore::with_kitchen(Arc::new(SimulatedKitchen::new(
        Duration::from_millis(400),
    ))));

    // Print the toast stream the way a view layer would render it
    let mut notifications = store.notifier().subscribe();
    let toast_task = tokio::spawn(async move {
        while let Ok(event) = notifications.recv().await {
            match event {
                NotifierEvent::Show(n) => info!(kind = ?n.kind, "toast: {}", n.message),
                NotifierEvent::DismissAll => info!("toast: (dismiss all)"),
            }
        }
    });

    info!(is_loading = store.is_loading(), "session start");

    // Fake network call for the menu
    let loader = MenuLoader::new(Duration::from_millis(200));
    loader.deliver(MENU_DOC, &store).await?;

    // Assemble an order
    let small_fries = store.add_from_menu("Fries", "small")?;
    store.add_from_menu("Fries", "regular")?;
    store.add_from_menu("Burger", "single")?;
    info!(total = %store.total(), lines = store.line_count(), "order assembled");

    // Second thoughts about the small fries
    store.remove_line(&small_fries);
    info!(total = %store.total(), lines = store.line_count(), "after removal");

    // Send it to the kitchen
    store.submit_order().await;
    info!(
        total = %store.total(),
        lines = store.line_count(),
        is_submitting = store.is_submitting(),
        "after submission"
    );

    // Let the toast task drain, then wind down
    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(store);
    let _ = toast_task.await;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-operation store logging
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
