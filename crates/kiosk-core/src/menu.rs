//! # Menu Module
//!
//! Menu domain types and the menu-document parse boundary.
//!
//! ## Input Format
//! The loader hands us a JSON document of this shape:
//! ```text
//! {
//!   "menu": [
//!     { "item": "Fries",
//!       "options": [ { "size": "small",   "price": 0.99 },
//!                    { "size": "regular", "price": 1.50 } ] }
//!   ]
//! }
//! ```
//!
//! ## Boundary Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menu field absent / null / empty  ──►  Ok(None)   "not yet loaded"    │
//! │  invalid JSON / wrong shape        ──►  Err(Malformed)                 │
//! │  item with zero options            ──►  Err(NoOptions)                 │
//! │  negative price                    ──►  Err(NegativePrice)             │
//! │  sub-cent price (e.g. 0.999)       ──►  Err(FractionalCents)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decimal prices are converted to integer cents exactly once, here. The
//! order aggregate and the store never see a floating-point amount.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, MenuError, OrderError};
use crate::money::Money;

// =============================================================================
// Menu Option
// =============================================================================

/// A purchasable size/price variant of a menu item.
///
/// Immutable once parsed; order lines hold a frozen copy so a later menu
/// refresh cannot change an in-progress order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuOption {
    /// Size label shown to the user ("small", "regular", "large").
    pub size: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl MenuOption {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A menu item with its available size options.
///
/// ## Invariant
/// `options` is non-empty - enforced at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Display name shown to the user and frozen onto order lines.
    pub name: String,

    /// Available size options, in document order.
    pub options: Vec<MenuOption>,
}

impl MenuItem {
    /// Looks up an option by its size label.
    pub fn option(&self, size: &str) -> Option<&MenuOption> {
        self.options.iter().find(|o| o.size == size)
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The parsed menu dataset, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Parses a menu document.
    ///
    /// ## Returns
    /// - `Ok(Some(menu))` - well-formed document with at least one item
    /// - `Ok(None)` - the `menu` field is absent, `null`, or empty; this
    ///   means "not yet loaded", never "empty menu"
    /// - `Err(MenuError)` - malformed document, rejected before it can reach
    ///   any order state
    pub fn from_document(document: &str) -> Result<Option<Menu>, MenuError> {
        let raw: MenuDocument = serde_json::from_str(document)?;

        let raw_items = match raw.menu {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(None),
        };

        let mut items = Vec::with_capacity(raw_items.len());
        for raw_item in raw_items {
            if raw_item.options.is_empty() {
                return Err(MenuError::NoOptions {
                    item: raw_item.item,
                });
            }

            let mut options = Vec::with_capacity(raw_item.options.len());
            for raw_option in raw_item.options {
                let price_cents = price_to_cents(&raw_item.item, &raw_option)?;
                options.push(MenuOption {
                    size: raw_option.size,
                    price_cents,
                });
            }

            items.push(MenuItem {
                name: raw_item.item,
                options,
            });
        }

        Ok(Some(Menu { items }))
    }

    /// Looks up a menu item by name.
    pub fn item(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Resolves an item/size pairing to its option.
    ///
    /// This is the validated lookup behind the store's `add_from_menu` path.
    pub fn option_for(&self, item: &str, size: &str) -> CoreResult<&MenuOption> {
        let menu_item = self.item(item).ok_or_else(|| OrderError::UnknownMenuItem {
            item: item.to_string(),
        })?;

        menu_item.option(size).ok_or_else(|| OrderError::UnknownOption {
            item: item.to_string(),
            size: size.to_string(),
        })
    }

    /// Returns the number of menu items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A parsed menu is never empty (empty documents parse to `None`).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Wire Types (private)
// =============================================================================

/// Top-level document wrapper. `menu` may be absent or null.
#[derive(Debug, Deserialize)]
struct MenuDocument {
    #[serde(default)]
    menu: Option<Vec<RawMenuItem>>,
}

/// Menu item as it appears on the wire (`item` instead of `name`).
#[derive(Debug, Deserialize)]
struct RawMenuItem {
    item: String,
    #[serde(default)]
    options: Vec<RawMenuOption>,
}

/// Size option as it appears on the wire: price is a decimal number.
#[derive(Debug, Deserialize)]
struct RawMenuOption {
    size: String,
    price: f64,
}

/// Converts a decimal wire price to integer cents.
///
/// Rejects negatives and anything that does not land on a whole cent.
fn price_to_cents(item: &str, raw: &RawMenuOption) -> Result<i64, MenuError> {
    if raw.price < 0.0 {
        return Err(MenuError::NegativePrice {
            item: item.to_string(),
            size: raw.size.clone(),
        });
    }

    let scaled = raw.price * 100.0;
    let cents = scaled.round();
    // 0.99 scales to 98.99999999999999 - tolerate float representation noise
    // but reject genuine sub-cent precision like 0.999
    if (scaled - cents).abs() > 1e-6 {
        return Err(MenuError::FractionalCents {
            item: item.to_string(),
            size: raw.size.clone(),
        });
    }

    Ok(cents as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================
