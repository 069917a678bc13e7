//! # Menu Loader
//!
//! One-time, delayed delivery of the menu dataset.
//!
//! The reference behavior fakes a network call: wait a configurable delay,
//! then hand a static document to the store. Until delivery the store
//! reports `is_loading = true` so the view layer can render a spinner and
//! disable add actions.
//!
//! Malformed documents fail fast here - they are logged and rejected at
//! this boundary and never reach the store, which assumes well-formed menu
//! values.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error};

use kiosk_core::{Menu, MenuError};

use crate::store::OrderStore;

/// Delivers the menu to a store after a simulated network delay.
#[derive(Debug, Clone)]
pub struct MenuLoader {
    delay: Duration,
}

impl MenuLoader {
    /// Default simulated network latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Creates a loader with the given delay (zero for tests).
    pub fn new(delay: Duration) -> Self {
        MenuLoader { delay }
    }

    /// Waits the configured delay, parses the document and installs the
    /// menu into the store.
    ///
    /// ## Returns
    /// - `Ok(true)` - menu delivered; `is_loading` is now false for good
    /// - `Ok(false)` - document had no menu yet (absent/null/empty field);
    ///   store stays in the loading state
    /// - `Err(MenuError)` - malformed document, store untouched
    pub async fn deliver(&self, document: &str, store: &OrderStore) -> Result<bool, MenuError> {
        sleep(self.delay).await;

        match Menu::from_document(document) {
            Ok(Some(menu)) => {
                store.set_menu(menu);
                Ok(true)
            }
            Ok(None) => {
                debug!("menu document not ready; store stays in loading state");
                Ok(false)
            }
            Err(err) => {
                error!(error = %err, "rejecting malformed menu document");
                Err(err)
            }
        }
    }
}

impl Default for MenuLoader {
    fn default() -> Self {
        MenuLoader::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::SimulatedKitchen;
    use std::sync::Arc;

    const FRIES_DOC: &str = r#"{
        "menu": [
            {
                "item": "Fries",
                "options": [
                    { "size": "small",   "price": 0.99 },
                    { "size": "regular", "price": 1.50 },
                    { "size": "large",   "price": 1.99 }
                ]
            }
        ]
    }"#;

    fn instant_store() -> OrderStore {
        OrderStore::with_kitchen(Arc::new(SimulatedKitchen::instant()))
    }

    #[tokio::test]
    async fn test_delivery_ends_loading_state() {
        let store = instant_store();
        let loader = MenuLoader::new(Duration::ZERO);

        assert!(store.is_loading());
        assert!(loader.deliver(FRIES_DOC, &store).await.unwrap());

        assert!(!store.is_loading());
        let menu = store.menu().unwrap();
        assert_eq!(menu.item("Fries").unwrap().options.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_document_keeps_loading_state() {
        let store = instant_store();
        let loader = MenuLoader::new(Duration::ZERO);

        assert!(!loader.deliver("{}", &store).await.unwrap());
        assert!(store.is_loading());

        assert!(!loader.deliver(r#"{"menu": null}"#, &store).await.unwrap());
        assert!(store.is_loading());
    }

    #[tokio::test]
    async fn test_malformed_document_rejected_before_store() {
        let store = instant_store();
        let loader = MenuLoader::new(Duration::ZERO);

        let doc = r#"{"menu": [{"item": "Fries", "options": []}]}"#;
        assert!(loader.deliver(doc, &store).await.is_err());
        assert!(store.is_loading());
    }
}
