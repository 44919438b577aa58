//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;
use supermarket_db::JournalMode;

/// Interactive supermarket inventory manager.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "supermarket", version, about)]
pub struct Cli {
    /// Database file path (default: ./supermarket.db)
    #[arg(short, long)]
    pub db: Option<PathBuf>,

    /// Config file (default: platform config dir / supermarket.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds to pause while an action is "in progress"
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// SQLite journal mode: delete or wal
    #[arg(long)]
    pub journal_mode: Option<JournalMode>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "warn,supermarket=info",
            _ => "warn,supermarket=debug,sqlx=info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["supermarket"]);
        assert!(cli.db.is_none());
        assert!(cli.config.is_none());
        assert!(cli.delay_ms.is_none());
        assert!(cli.journal_mode.is_none());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "supermarket",
            "--db",
            "shop.db",
            "--config",
            "shop.toml",
            "--delay-ms",
            "0",
            "--journal-mode",
            "wal",
            "-vv",
        ]);
        assert_eq!(cli.db, Some(PathBuf::from("shop.db")));
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
        assert_eq!(cli.delay_ms, Some(0));
        assert_eq!(cli.journal_mode, Some(JournalMode::Wal));
        assert_eq!(cli.log_filter(), "warn,supermarket=debug,sqlx=info");
    }

    #[test]
    fn test_bad_journal_mode_rejected() {
        assert!(Cli::try_parse_from(["supermarket", "--journal-mode", "truncate"]).is_err());
    }
}
