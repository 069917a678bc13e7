//! # Order Module
//!
//! The order aggregate: the lines a user has assembled and their total.
//!
//! ## Identity Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A line is identified by its uid ALONE, never by item + option.        │
//! │                                                                         │
//! │  add "Fries" (small)  ──► line { uid: a1.., Fries, small }              │
//! │  add "Fries" (small)  ──► line { uid: 7f.., Fries, small }              │
//! │                                                                         │
//! │  Two identical choices are two distinct, independently removable       │
//! │  lines. Removing one leaves the other (and the ordering) intact.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is pure data manipulation; the stateful wrapper with observers and
//! notifications lives in kiosk-store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::menu::MenuOption;
use crate::money::Money;

// =============================================================================
// Order Line
// =============================================================================

/// One unit of a chosen menu item + size option, independently removable.
///
/// ## Design Notes
/// - `uid`: UUID v4, unique among all lines ever created for this order
/// - `item_name` / `option`: frozen copies of menu data at time of adding,
///   so the line displays consistently even if the menu is refreshed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Unique identifier of this line within the order.
    pub uid: String,

    /// Name of the menu item at time of adding (frozen).
    pub item_name: String,

    /// The chosen size option at time of adding (frozen).
    pub option: MenuOption,

    /// When this line was added to the order.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl OrderLine {
    /// Creates a new line with a fresh uid.
    pub fn new(item_name: impl Into<String>, option: MenuOption) -> Self {
        OrderLine {
            uid: Uuid::new_v4().to_string(),
            item_name: item_name.into(),
            option,
            added_at: Utc::now(),
        }
    }

    /// Returns the line price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        self.option.price()
    }
}

// =============================================================================
// Order
// =============================================================================

/// The user's in-progress order.
///
/// ## Invariants
/// - Lines keep insertion order
/// - `total()` equals the sum of line prices, zero when empty
/// - Removal of one line preserves the relative order of the rest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Lines in insertion order.
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Appends a new line for the given item/option choice.
    ///
    /// Infallible: the caller is responsible for passing a valid pairing
    /// (the validated path resolves it via [`crate::Menu::option_for`]).
    /// Returns the created line so callers can surface its uid.
    pub fn add_line(&mut self, item_name: impl Into<String>, option: MenuOption) -> &OrderLine {
        self.lines.push(OrderLine::new(item_name, option));
        // Just pushed, so the vec is non-empty
        self.lines.last().expect("line just pushed")
    }

    /// Removes a line by uid, preserving the relative order of the rest.
    ///
    /// Returns the removed line, or `None` if no line has that uid.
    pub fn remove_line(&mut self, uid: &str) -> Option<OrderLine> {
        let index = self.lines.iter().position(|l| l.uid == uid)?;
        Some(self.lines.remove(index))
    }

    /// Calculates the order total.
    ///
    /// Pure function of the current lines; zero for an empty order.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.price()).sum()
    }

    /// Clears all lines (successful submission).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
