//! # Domain Types
//!
//! The single record type of the inventory manager.
//!
//! ## Record vs Row
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Product (in memory)                supermarket (SQLite row)            │
//! │  ─────────────────────              ────────────────────────            │
//! │  name:     String        ◄────────► name     TEXT                       │
//! │  price:    f64           ◄────────► price    REAL                       │
//! │  quantity: i64           ◄────────► quantity INTEGER                    │
//! │                                                                         │
//! │  No id column: the name is the business key, but it is NOT unique.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Product
// =============================================================================

/// One inventory item.
///
/// Nothing is validated here: duplicate names, negative prices and negative
/// quantities are all accepted and stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Display name, used as the lookup key for update/remove/search.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Creates a product from its three fields.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns a value that renders this product the way query results are
    /// printed (name, price with a `$` suffix, quantity, trailing blank).
    ///
    /// ## Example
    /// ```rust
    /// use supermarket_core::Product;
    ///
    /// let row = Product::new("Milk", 3.0, 5);
    /// assert_eq!(
    ///     row.row_display().to_string(),
    ///     "Product Name: Milk\nProduct Price: 3.0 $\nProduct Quantity: 5\n "
    /// );
    /// ```
    pub fn row_display(&self) -> RowDisplay<'_> {
        RowDisplay(self)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product Name: {}\nPrice: {}\nNumber: {}",
            self.name,
            Price(self.price),
            self.quantity
        )
    }
}

/// Query-result rendering of a [`Product`], see [`Product::row_display`].
#[derive(Debug, Clone, Copy)]
pub struct RowDisplay<'a>(&'a Product);

impl fmt::Display for RowDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product Name: {}\nProduct Price: {} $\nProduct Quantity: {}\n ",
            self.0.name,
            Price(self.0.price),
            self.0.quantity
        )
    }
}

// =============================================================================
// Price Formatting
// =============================================================================

/// Formats a price so whole numbers keep their decimal point (`3.0`, not `3`).
///
/// `Debug` for `f64` prints the shortest round-tripping form with a trailing `.0`.
struct Price(f64);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
