//! # Product Repository
//!
//! Database operations on the `supermarket` table.
//!
//! ## Key Operations
//! - Insert, update by name, delete by name
//! - List all, search by exact name, filter by inclusive price range
//!
//! ## Name Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Name Is Not Unique                                   │
//! │                                                                         │
//! │  rowid │ name  │ price │ quantity                                       │
//! │  ──────┼───────┼───────┼─────────                                       │
//! │    1   │ Milk  │  2.5  │   10      ◄─┐                                  │
//! │    2   │ Bread │  1.2  │   40        │ update("Milk", 3.0, 5)           │
//! │    3   │ Milk  │  2.7  │    4      ◄─┘ touches BOTH rows                │
//! │                                                                         │
//! │  update/remove on a name with no rows: 0 rows affected, Ok(0)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use supermarket_core::{EmptyReason, Listing, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// repo.add(&Product::new("Milk", 2.5, 10)).await?;
/// let listing = repo.search("Milk").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inserts a new row.
    ///
    /// No uniqueness check: adding the same name twice yields two rows.
    pub async fn add(&self, product: &Product) -> DbResult<()> {
        debug!(name = %product.name, price = product.price, quantity = product.quantity, "Adding product");

        sqlx::query("INSERT INTO supermarket (name, price, quantity) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes every row with the given name.
    ///
    /// ## Returns
    /// Number of rows deleted. Zero is not an error.
    pub async fn remove(&self, name: &str) -> DbResult<u64> {
        debug!(name = %name, "Removing product");

        let result = sqlx::query("DELETE FROM supermarket WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Remove finished");
        Ok(result.rows_affected())
    }

    /// Sets price and quantity on every row named `product.name`.
    ///
    /// Never inserts. The name itself is unchanged.
    ///
    /// ## Returns
    /// Number of rows updated. Zero is not an error.
    pub async fn update(&self, product: &Product) -> DbResult<u64> {
        debug!(name = %product.name, "Updating product");

        let result = sqlx::query("UPDATE supermarket SET price = ?1, quantity = ?2 WHERE name = ?3")
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.name)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Update finished");
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Row Queries
    // =========================================================================

    /// Returns every row in storage order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT name, price, quantity FROM supermarket ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Returns rows whose name equals `name` exactly (case-sensitive).
    pub async fn by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT name, price, quantity FROM supermarket WHERE name = ?1 ORDER BY rowid",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Returns rows with `min_price <= price <= max_price`.
    ///
    /// An inverted range (`min_price > max_price`) matches nothing.
    pub async fn in_price_range(&self, min_price: f64, max_price: f64) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT name, price, quantity
            FROM supermarket
            WHERE price >= ?1 AND price <= ?2
            ORDER BY rowid
            "#,
        )
        .bind(min_price)
        .bind(max_price)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts all rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supermarket")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Lists every product, or `NoProducts` if the table is empty.
    pub async fn list(&self) -> DbResult<Listing> {
        let rows = self.all().await?;
        debug!(count = rows.len(), "Listed products");
        Ok(Listing::from_rows(rows, EmptyReason::NoProducts))
    }

    /// Exact-name search, or `NotFound`.
    pub async fn search(&self, name: &str) -> DbResult<Listing> {
        let rows = self.by_name(name).await?;
        debug!(name = %name, count = rows.len(), "Searched products");
        Ok(Listing::from_rows(rows, EmptyReason::NotFound))
    }

    /// Inclusive price-range filter, or `NoMatches`.
    pub async fn filter(&self, min_price: f64, max_price: f64) -> DbResult<Listing> {
        let rows = self.in_price_range(min_price, max_price).await?;
        debug!(min_price, max_price, count = rows.len(), "Filtered products");
        Ok(Listing::from_rows(rows, EmptyReason::NoMatches))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
