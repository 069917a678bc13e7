//! # Kitchen Seam
//!
//! The submission boundary: where a completed order leaves the store.
//!
//! The reference behavior is a fixed-delay simulation that always succeeds,
//! but the seam is a trait so a real transport can slot in later and so
//! tests can inject zero delay or forced failures. The store handles the
//! failure branch either way: submitting flag reset, lines preserved, error
//! toast.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::sleep;

use kiosk_core::OrderLine;

// =============================================================================
// Kitchen Error
// =============================================================================

/// Order submission failures.
///
/// Distinct from the success notification path: the store keeps the order
/// lines when any of these come back, so the user can retry.
#[derive(Debug, Error)]
pub enum KitchenError {
    /// The kitchen refused the order.
    #[error("Kitchen rejected the order: {reason}")]
    Rejected { reason: String },

    /// The kitchen could not be reached at all.
    #[error("Kitchen is unreachable")]
    Unreachable,
}

// =============================================================================
// Kitchen Trait
// =============================================================================

/// Accepts a submitted order for fulfillment.
#[async_trait]
pub trait Kitchen: Send + Sync {
    /// Submits the order lines. Resolves once the kitchen has accepted
    /// (or refused) the order.
    async fn submit(&self, lines: &[OrderLine]) -> Result<(), KitchenError>;
}

// =============================================================================
// Simulated Kitchen
// =============================================================================

/// The reference kitchen: waits a fixed delay, then accepts.
///
/// ## Delay
/// Defaults to 2.5 seconds. Inject [`SimulatedKitchen::instant`] in tests
/// for deterministic, immediate completion.
#[derive(Debug, Clone)]
pub struct SimulatedKitchen {
    delay: Duration,
}

impl SimulatedKitchen {
    /// Default simulated submission latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

    /// Creates a simulated kitchen with the given latency.
    pub fn new(delay: Duration) -> Self {
        SimulatedKitchen { delay }
    }

    /// A kitchen that accepts immediately (for tests and demos).
    pub fn instant() -> Self {
        SimulatedKitchen::new(Duration::ZERO)
    }
}

impl Default for SimulatedKitchen {
    fn default() -> Self {
        SimulatedKitchen::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Kitchen for SimulatedKitchen {
    async fn submit(&self, _lines: &[OrderLine]) -> Result<(), KitchenError> {
        sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_kitchen_accepts() {
        let kitchen = SimulatedKitchen::instant();
        assert!(kitchen.submit(&[]).await.is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = KitchenError::Rejected {
            reason: "fryer offline".to_string(),
        };
        assert_eq!(err.to_string(), "Kitchen rejected the order: fryer offline");
        assert_eq!(KitchenError::Unreachable.to_string(), "Kitchen is unreachable");
    }
}
