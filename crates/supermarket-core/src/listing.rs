//! # Query Outcomes
//!
//! List, search and filter either return rows or an explicit "nothing here"
//! outcome. An empty result is never printed as an empty collection.
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬────────────────────────────────┐
//! │ Query        │ Empty outcome            │ Message                        │
//! ├──────────────┼──────────────────────────┼────────────────────────────────┤
//! │ list()       │ EmptyReason::NoProducts  │ No products in the supermarket │
//! │ search(name) │ EmptyReason::NotFound    │ Product not found              │
//! │ filter(a, b) │ EmptyReason::NoMatches   │ No products found              │
//! └──────────────┴──────────────────────────┴────────────────────────────────┘
//! ```

use std::fmt;

use crate::types::Product;

/// Why a query produced no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The table has no rows at all.
    NoProducts,
    /// No row has the requested name.
    NotFound,
    /// No row has a price inside the requested range.
    NoMatches,
}

impl EmptyReason {
    /// Message shown to the operator.
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoProducts => "No products in the supermarket",
            EmptyReason::NotFound => "Product not found",
            EmptyReason::NoMatches => "No products found",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a list, search or filter query.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// At least one row matched, in storage order.
    Found(Vec<Product>),
    /// Nothing matched.
    Empty(EmptyReason),
}

impl Listing {
    /// Wraps query rows, turning an empty vector into `Empty(reason)`.
    pub fn from_rows(rows: Vec<Product>, reason: EmptyReason) -> Self {
        if rows.is_empty() {
            Listing::Empty(reason)
        } else {
            Listing::Found(rows)
        }
    }

    /// Returns the matched rows (empty slice for an empty outcome).
    pub fn products(&self) -> &[Product] {
        match self {
            Listing::Found(rows) => rows,
            Listing::Empty(_) => &[],
        }
    }

    /// Returns the empty reason, if nothing matched.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Listing::Found(_) => None,
            Listing::Empty(reason) => Some(*reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty(_))
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            Listing::Found(rows) => rows,
            Listing::Empty(_) => Vec::new(),
        }
    }
}

/// Each row on its own block, or the empty message.
impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Found(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", row.row_display())?;
                }
                Ok(())
            }
            Listing::Empty(reason) => write!(f, "{}", reason),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
