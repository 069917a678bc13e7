//! # kiosk-core: Pure Domain Logic for Kiosk
//!
//! This crate is the **heart** of Kiosk. It contains the ordering domain
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kiosk Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  View Layer (JS single-page app)                │   │
//! │  │    Menu grid ──► Size picker ──► Order summary ──► Submit       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / notifications              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kiosk-store                                  │   │
//! │  │    OrderStore, MenuLoader, Notifier, Kitchen                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   menu    │  │   order   │  │   error   │  │   │
//! │  │   │   Money   │  │ MenuItem  │  │   Order   │  │ MenuError │  │   │
//! │  │   │  Display  │  │MenuOption │  │ OrderLine │  │OrderError │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO CHANNELS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - Menu document parsing and lookup
//! - [`order`] - The order aggregate (lines, totals)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Timers, channels and notification delivery live in kiosk-store
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{Menu, Order};
//!
//! let menu = Menu::from_document(
//!     r#"{"menu":[{"item":"Fries","options":[{"size":"small","price":0.99}]}]}"#,
//! )
//! .unwrap()
//! .expect("menu present");
//!
//! let mut order = Order::new();
//! let option = menu.option_for("Fries", "small").unwrap().clone();
//! order.add_line("Fries", option);
//!
//! assert_eq!(order.total().cents(), 99);
//! assert_eq!(format!("{}", order.total()), "$0.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Money` instead of
// `use kiosk_core::money::Money`

pub use error::{CoreResult, MenuError, OrderError};
pub use menu::{Menu, MenuItem, MenuOption};
pub use money::Money;
pub use order::{Order, OrderLine};
