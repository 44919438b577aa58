//! # supermarket-db: Database Layer for the Inventory Manager
//!
//! This crate owns the single SQLite table backing the inventory and every
//! statement executed against it. It uses sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Data Flow                              │
//! │                                                                         │
//! │  Menu choice (e.g. 5 = Search)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  supermarket-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐    ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repository    │    │   Schema    │  │   │
//! │  │   │   (pool.rs)   │    │  (product.rs)   │    │ (schema.rs) │  │   │
//! │  │   │               │    │                 │    │             │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo     │    │ CREATE IF   │  │   │
//! │  │   │ (1 conn)      │    │ add/remove/...  │    │ NOT EXISTS  │  │   │
//! │  │   └───────────────┘    └─────────────────┘    └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./supermarket.db                                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection creation and configuration
//! - [`schema`] - Idempotent table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Product CRUD and queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use supermarket_core::Product;
//! use supermarket_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("supermarket.db")).await?;
//!
//! db.products().add(&Product::new("Milk", 2.5, 10)).await?;
//! println!("{}", db.products().search("Milk").await?);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, JournalMode};

pub use repository::product::ProductRepository;
