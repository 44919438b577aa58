//! # Seed Data Generator
//!
//! Populates the `supermarket` table with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the built-in grocery catalogue into ./supermarket.db
//! cargo run -p supermarket-db --bin seed
//!
//! # Specify database path
//! cargo run -p supermarket-db --bin seed -- --db ./data/supermarket.db
//!
//! # Load products from a TOML catalogue instead
//! cargo run -p supermarket-db --bin seed -- --file catalogue.toml
//! ```
//!
//! ## Catalogue Format
//! ```toml
//! [[products]]
//! name = "Milk"
//! price = 2.5
//! quantity = 10
//! ```

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use supermarket_core::Product;
use supermarket_db::{Database, DbConfig};

/// Built-in catalogue: (name, price, quantity).
const CATALOGUE: &[(&str, f64, i64)] = &[
    ("Milk", 2.5, 10),
    ("Bread", 1.2, 40),
    ("Eggs", 3.0, 24),
    ("Butter", 4.25, 12),
    ("Cheddar Cheese", 6.8, 7),
    ("Apples", 0.6, 150),
    ("Bananas", 0.3, 200),
    ("Rice", 4.75, 30),
    ("Pasta", 1.9, 55),
    ("Olive Oil", 9.5, 9),
    ("Coffee", 12.0, 15),
    ("Orange Juice", 3.4, 18),
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Seed the supermarket table with sample products")]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "supermarket.db")]
    db: PathBuf,

    /// TOML catalogue to load instead of the built-in one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Insert even if the table already has rows
    #[arg(long)]
    force: bool,
}

#[derive(Debug, Deserialize)]
struct Catalogue {
    #[serde(default)]
    products: Vec<Product>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Supermarket Seed Data Generator");
    println!("===============================");
    println!("Database: {}", args.db.display());

    let products = match &args.file {
        Some(path) => {
            println!("Catalogue: {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<Catalogue>(&contents)?.products
        }
        None => builtin_catalogue(),
    };
    println!("Products: {}", products.len());
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;
    println!("✓ Connected to database");

    let existing = db.products().count().await?;
    if existing > 0 && !args.force {
        println!("⚠ Table already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Pass --force to insert anyway.");
        db.close().await;
        return Ok(());
    }

    let repo = db.products();
    let mut inserted = 0;
    for product in &products {
        if let Err(e) = repo.add(product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }
        inserted += 1;
    }

    println!("✓ Inserted {} products", inserted);
    println!("  Table now holds {} rows", repo.count().await?);

    db.close().await;
    Ok(())
}

fn builtin_catalogue() -> Vec<Product> {
    CATALOGUE
        .iter()
        .map(|(name, price, quantity)| Product::new(*name, *price, *quantity))
        .collect()
}
