//! # supermarket-core: Record Types for the Inventory Manager
//!
//! This crate holds the plain data types shared by the store and the
//! interactive menu. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Supermarket Inventory                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (menu loop)                         │   │
//! │  │    1 Add ─ 2 Remove ─ 3 List ─ 4 Update ─ 5 Search ─ 6 Filter   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ supermarket-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐          ┌───────────────┐                  │   │
//! │  │   │    types      │          │   listing     │                  │   │
//! │  │   │   Product     │          │   Listing     │                  │   │
//! │  │   │               │          │  EmptyReason  │                  │   │
//! │  │   └───────────────┘          └───────────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                supermarket-db (Database Layer)                  │   │
//! │  │           supermarket(name TEXT, price REAL, quantity INTEGER)  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` record
//! - [`listing`] - Outcome of a list/search/filter query
//!
//! ## Example Usage
//!
//! ```rust
//! use supermarket_core::Product;
//!
//! let milk = Product::new("Milk", 2.5, 10);
//! assert_eq!(milk.to_string(), "Product Name: Milk\nPrice: 2.5\nNumber: 10");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod listing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use listing::{EmptyReason, Listing};
pub use types::*;
