//! # Application Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --db ./shop.db --delay-ms 0                                        │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SUPERMARKET_DB_PATH=./shop.db                                      │
//! │     SUPERMARKET_ACTION_DELAY_MS=0                                      │
//! │     SUPERMARKET_JOURNAL_MODE=wal                                       │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/supermarket/supermarket.toml (Linux)                     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ./supermarket.db, delete journal, 2000 ms delay                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [database]
//! path = "supermarket.db"
//! journal_mode = "delete"   # delete | wal
//!
//! [ui]
//! action_delay_ms = 2000
//! ```

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use supermarket_db::{DbConfig, JournalMode};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "supermarket.toml";

// =============================================================================
// Database Settings
// =============================================================================

/// Where and how the store file is opened.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite file. Relative paths resolve against the working directory.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// SQLite journal mode.
    #[serde(default)]
    pub journal_mode: JournalMode,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("supermarket.db")
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: default_database_path(),
            journal_mode: JournalMode::default(),
        }
    }
}

// =============================================================================
// UI Settings
// =============================================================================

/// Menu behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiSettings {
    /// Pause between "is being ..." and "is ..." feedback lines (milliseconds).
    #[serde(default = "default_action_delay")]
    pub action_delay_ms: u64,
}

fn default_action_delay() -> u64 {
    2000
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            action_delay_ms: default_action_delay(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl AppConfig {
    /// Loads configuration from file and environment, then applies flags.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    /// 4. Command-line flags
    pub fn load(cli: &Cli) -> CliResult<Self> {
        let mut config = Self::from_file(cli.config.clone())?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file, or returns defaults when there is none.
    ///
    /// An explicitly given path must exist; the platform default path may be absent.
    pub fn from_file(explicit: Option<PathBuf>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    return Ok(Self::default());
                }
                None => return Ok(Self::default()),
            },
        };

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parses a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `SUPERMARKET_*` environment overrides through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("SUPERMARKET_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Some(mode) = lookup("SUPERMARKET_JOURNAL_MODE") {
            match mode.parse() {
                Ok(parsed) => self.database.journal_mode = parsed,
                Err(_) => warn!(mode = %mode, "Unknown journal mode in environment"),
            }
        }

        if let Some(delay) = lookup("SUPERMARKET_ACTION_DELAY_MS") {
            self.ui.action_delay_ms = delay.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "SUPERMARKET_ACTION_DELAY_MS must be a whole number of milliseconds, got '{}'",
                    delay
                ))
            })?;
        }

        Ok(())
    }

    /// Applies command-line flags.
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.db {
            self.database.path = path.clone();
        }
        if let Some(mode) = cli.journal_mode {
            self.database.journal_mode = mode;
        }
        if let Some(delay) = cli.delay_ms {
            self.ui.action_delay_ms = delay;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(CliError::Config("database path must not be empty".into()));
        }
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "supermarket")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Builds the database configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.path).journal_mode(self.database.journal_mode)
    }

    /// Returns the delay between action feedback lines.
    pub fn action_delay(&self) -> Duration {
        Duration::from_millis(self.ui.action_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database.path, PathBuf::from("supermarket.db"));
        assert_eq!(config.database.journal_mode, JournalMode::Delete);
        assert_eq!(config.action_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[ui]\naction_delay_ms = 0\n").unwrap();
        assert_eq!(config.ui.action_delay_ms, 0);
        assert_eq!(config.database, DatabaseSettings::default());

        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml(
            r#"
            [database]
            path = "/var/lib/shop/inventory.db"
            journal_mode = "wal"

            [ui]
            action_delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/var/lib/shop/inventory.db"));
        assert_eq!(config.database.journal_mode, JournalMode::Wal);
        assert_eq!(config.action_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[database]\njournal_mode = \"truncate\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[database]\npath = \"shop.db\"\n").unwrap();

        let config = AppConfig::from_file(Some(path)).unwrap();
        assert_eq!(config.database.path, PathBuf::from("shop.db"));
        assert_eq!(config.ui, UiSettings::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[
                ("SUPERMARKET_DB_PATH", "/tmp/env.db"),
                ("SUPERMARKET_JOURNAL_MODE", "WAL"),
                ("SUPERMARKET_ACTION_DELAY_MS", "10"),
            ]))
            .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.database.journal_mode, JournalMode::Wal);
        assert_eq!(config.ui.action_delay_ms, 10);
    }

    #[test]
    fn test_env_bad_delay_is_error() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_overrides(env(&[("SUPERMARKET_ACTION_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_env_unknown_journal_mode_is_ignored() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[("SUPERMARKET_JOURNAL_MODE", "truncate")]))
            .unwrap();
        assert_eq!(config.database.journal_mode, JournalMode::Delete);
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[("SUPERMARKET_DB_PATH", "/tmp/env.db")]))
            .unwrap();

        let cli = Cli::parse_from(["supermarket", "--db", "cli.db", "--delay-ms", "0"]);
        config.apply_cli_overrides(&cli);

        assert_eq!(config.database.path, PathBuf::from("cli.db"));
        assert_eq!(config.ui.action_delay_ms, 0);
        assert_eq!(config.db_config().database_path, PathBuf::from("cli.db"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut config = AppConfig::default();
        config.database.path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
