//! # Repository Module
//!
//! Database repository implementations for the inventory manager.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Menu handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().search("Milk")                                  │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── add(&self, product)                                               │
//! │  ├── remove(&self, name)                                               │
//! │  ├── update(&self, product)                                            │
//! │  ├── list(&self) / search(&self, name) / filter(&self, min, max)       │
//! │       │                                                                 │
//! │       │  One parameterized statement, autocommitted                    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and queries

pub mod product;
