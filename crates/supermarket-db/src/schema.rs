//! # Table Bootstrap
//!
//! The store has exactly one table and no versioned migrations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup                                            │
//! │                                                                         │
//! │  Database::new(config)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS supermarket (                               │
//! │      name     TEXT,                                                     │
//! │      price    REAL,                                                     │
//! │      quantity INTEGER                                                   │
//! │  )                                                                      │
//! │       │                                                                 │
//! │       ├── table exists?  no-op                                          │
//! │       └── missing?       created                                        │
//! │                                                                         │
//! │  No indexes, no UNIQUE on name, no primary key besides SQLite's rowid.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the `supermarket` table.
pub const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS supermarket (name TEXT, price REAL, quantity INTEGER)";

/// Creates the `supermarket` table if it does not exist.
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(CREATE_TABLE_SQL)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!("supermarket table ready");
    Ok(())
}

/// Returns the column names of the `supermarket` table, in declaration order.
///
/// Used for diagnostics; an empty vector means the table is missing.
pub async fn table_columns(pool: &SqlitePool) -> DbResult<Vec<(String, String)>> {
    let columns: Vec<(String, String)> =
        sqlx::query_as("SELECT name, type FROM pragma_table_info('supermarket') ORDER BY cid")
            .fetch_all(pool)
            .await?;

    Ok(columns)
}
