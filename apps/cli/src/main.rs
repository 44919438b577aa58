//! # Supermarket Inventory Entry Point
//!
//! ```text
//!  1. Add product
//!  2. Remove product
//!  3. List All Products
//!  4. Update Product
//!  5. Search Product
//!  6. Filter Product by price
//!  7. Exit
//! ```
//!
//! Any input or database error ends the session with exit status 1.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use supermarket_cli::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    supermarket_cli::init_tracing(cli.log_filter());

    match supermarket_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Session ended with an error");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
