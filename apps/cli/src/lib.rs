//! # Supermarket CLI Library
//!
//! The interactive front end of the inventory manager.
//!
//! ## Module Organization
//! ```text
//! supermarket_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── config.rs       ◄─── AppConfig (defaults → TOML → env → flags)
//! ├── console.rs      ◄─── Prompt/read/print over any BufRead + Write
//! ├── menu.rs         ◄─── Command enum and handlers
//! └── error.rs        ◄─── CliError
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use console::Console;
use error::CliResult;
use menu::Menu;
use supermarket_db::Database;

/// Runs the interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load configuration ──────────────────────────────────────────────► │
/// │     • defaults, supermarket.toml, SUPERMARKET_* env, flags              │
/// │                                                                         │
/// │  2. Open database ───────────────────────────────────────────────────► │
/// │     • create file if missing                                            │
/// │     • CREATE TABLE IF NOT EXISTS supermarket                            │
/// │                                                                         │
/// │  3. Menu loop until option 7 (or a fatal input error)                   │
/// │                                                                         │
/// │  4. Close the connection                                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(&cli)?;
    info!(
        path = %config.database.path.display(),
        delay_ms = config.ui.action_delay_ms,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut menu = Menu::new(db.products(), console, config.action_delay());
    let result = menu.run().await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=supermarket_db=debug` - Only the database layer
/// - Default: `warn`, raised by `-v`/`-vv`
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
