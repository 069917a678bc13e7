//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                          │
//! │  ├── MenuError   - Malformed menu documents (parse boundary)            │
//! │  └── OrderError  - Menu lookup failures on the validated add path       │
//! │                                                                         │
//! │  kiosk-store errors (separate crate)                                    │
//! │  └── KitchenError - Order submission failures                           │
//! │                                                                         │
//! │  Flow: MenuError stops at the load boundary (logged, menu rejected).    │
//! │        OrderError/KitchenError are absorbed by the store and surface    │
//! │        only as notifications - the view layer never sees a fault.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, size, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Menu Error
// =============================================================================

/// Errors raised while parsing a menu document.
///
/// The store layer assumes well-formed `MenuItem`/`MenuOption` values, so
/// malformed documents must be rejected here, at the load boundary, before
/// they reach any order state.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The document is not valid JSON or does not match the menu shape.
    #[error("Malformed menu document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A menu item carries no size options.
    ///
    /// Every item needs at least one purchasable option; an optionless item
    /// cannot be added to an order.
    #[error("Menu item '{item}' has no size options")]
    NoOptions { item: String },

    /// A size option carries a negative price.
    #[error("Menu item '{item}' option '{size}' has a negative price")]
    NegativePrice { item: String, size: String },

    /// A size option's price has sub-cent precision.
    ///
    /// Prices are stored as integer cents; a document price of `0.999`
    /// cannot be represented exactly and is rejected rather than rounded.
    #[error("Menu item '{item}' option '{size}' has sub-cent precision")]
    FractionalCents { item: String, size: String },
}

// =============================================================================
// Order Error
// =============================================================================

/// Menu lookup failures on the validated add path.
///
/// The raw `add_line` path never fails; these errors only occur when a
/// caller asks the store to resolve an item/size pairing against the loaded
/// menu (`add_from_menu`).
#[derive(Debug, Error)]
pub enum OrderError {
    /// The menu has not been delivered yet.
    #[error("Menu is not loaded yet")]
    MenuNotLoaded,

    /// No menu item with the given name.
    #[error("Unknown menu item: {item}")]
    UnknownMenuItem { item: String },

    /// The item exists, but has no option with the given size.
    #[error("Menu item '{item}' has no '{size}' option")]
    UnknownOption { item: String, size: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type CoreResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
