//! # Database Connection Management
//!
//! Connection creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection                                │
//! │                                                                         │
//! │  CLI Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file path, journal mode               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Open file + ensure table                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐                                │                           │
//! │  │  │Conn1│   exactly one, held for the    │                           │
//! │  │  └─────┘   lifetime of the process      │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu action ──► one statement ──► autocommit                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! The store assumes it is the only process touching the file. There is no
//! busy-retry and no locking beyond what SQLite does for a single statement.

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

/// Path value that selects a private in-memory database.
const MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Journal Mode
// =============================================================================

/// SQLite journal mode for the database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    /// Rollback journal, deleted after each commit. SQLite's own default.
    #[default]
    Delete,

    /// Write-ahead log (`-wal` and `-shm` files next to the database).
    Wal,
}

impl From<JournalMode> for SqliteJournalMode {
    fn from(mode: JournalMode) -> Self {
        match mode {
            JournalMode::Delete => SqliteJournalMode::Delete,
            JournalMode::Wal => SqliteJournalMode::Wal,
        }
    }
}

impl fmt::Display for JournalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalMode::Delete => write!(f, "delete"),
            JournalMode::Wal => write!(f, "wal"),
        }
    }
}

impl FromStr for JournalMode {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "delete" => Ok(JournalMode::Delete),
            "wal" => Ok(JournalMode::Wal),
            other => Err(DbError::InvalidConfig(format!(
                "Unknown journal mode: '{}'. Valid options: delete, wal",
                other
            ))),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./supermarket.db")
///     .journal_mode(JournalMode::Wal);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file. `:memory:` for a private in-memory database.
    pub database_path: PathBuf,

    /// Journal mode.
    /// Default: `delete`
    pub journal_mode: JournalMode,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to create the `supermarket` table on connect.
    /// Default: true
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            journal_mode: JournalMode::default(),
            connect_timeout: Duration::from_secs(30),
            ensure_schema: true,
        }
    }

    /// Sets the journal mode.
    pub fn journal_mode(mut self, mode: JournalMode) -> Self {
        self.journal_mode = mode;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to create the table on connect.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::in_memory()).await?;
    /// // Database is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(MEMORY_PATH),
            journal_mode: JournalMode::Delete,
            connect_timeout: Duration::from_secs(5),
            ensure_schema: true,
        }
    }

    /// Returns true if this configuration targets an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            .journal_mode(self.journal_mode.into())
            // Create file if it doesn't exist
            .create_if_missing(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Owned database handle providing repository access.
///
/// There is no process-wide connection: whoever needs the store holds a
/// `Database` (or a repository obtained from it).
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::new("supermarket.db")).await?;
/// let listing = db.products().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// Pool capped at a single connection.
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the database and ensures the table exists.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Opens exactly one connection and keeps it open (no idle reaping)
    /// 3. Runs `CREATE TABLE IF NOT EXISTS supermarket(...)` (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or table creation failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            journal_mode = %config.journal_mode,
            "Opening database"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        // One connection for the lifetime of the process. An in-memory
        // database would be lost if the connection were ever recycled.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let db = Database { pool };

        if config.ensure_schema {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Creates the `supermarket` table if absent. Idempotent.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods; this is for diagnostics and tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let listing = db.products().search("Milk").await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the connection.
    ///
    /// ## Note
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use supermarket_core::Product;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_closed_database_is_unhealthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        assert!(db.products().list().await.is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .journal_mode(JournalMode::Wal)
            .connect_timeout(Duration::from_secs(1))
            .ensure_schema(false);

        assert_eq!(config.journal_mode, JournalMode::Wal);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert!(!config.ensure_schema);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[test]
    fn test_journal_mode_parsing() {
        assert_eq!("wal".parse::<JournalMode>().unwrap(), JournalMode::Wal);
        assert_eq!("DELETE".parse::<JournalMode>().unwrap(), JournalMode::Delete);
        assert!("truncate".parse::<JournalMode>().is_err());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermarket.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.products().add(&Product::new("Rice", 4.75, 8)).await.unwrap();
        db.close().await;

        assert!(path.exists());

        let reopened = Database::new(DbConfig::new(&path)).await.unwrap();
        let rows = reopened.products().all().await.unwrap();
        assert_eq!(rows, vec![Product::new("Rice", 4.75, 8)]);
    }

    #[tokio::test]
    async fn test_missing_parent_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("supermarket.db");

        let result = Database::new(DbConfig::new(path)).await;
        assert!(matches!(result, Err(DbError::ConnectionFailed(_))));
    }
}
