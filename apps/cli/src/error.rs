//! # CLI Error Type
//!
//! Every failure that ends the interactive session.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Non-numeric price/quantity/choice ──► CliError::InvalidNumber          │
//! │  stdin closed mid-prompt           ──► CliError::UnexpectedEof          │
//! │  SQLite failure                    ──► CliError::Db(DbError)            │
//! │  Bad supermarket.toml              ──► CliError::Config                 │
//! │  Terminal write failure            ──► CliError::Io                     │
//! │                                                                         │
//! │  All of them propagate out of main() and exit with status 1.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use supermarket_db::DbError;
use thiserror::Error;

/// Errors surfaced by the interactive menu.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text entered where a number was expected.
    #[error("Invalid {field}: '{input}' is not a valid number")]
    InvalidNumber { field: &'static str, input: String },

    /// Input ended while a prompt was waiting for a line.
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Database failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Configuration file or override could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::InvalidNumber {
            field: "price",
            input: "cheap".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid price: 'cheap' is not a valid number");

        let err: CliError = DbError::PoolExhausted.into();
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }
}
