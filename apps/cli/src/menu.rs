//! # Interactive Menu
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  print menu (once)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Enter your choice: " ◄──────────────────────────────┐                 │
//! │       │                                               │                 │
//! │       ├── not a number ──► CliError (session ends)    │                 │
//! │       ├── 1..=6 ──► Command ──► handler ──────────────┤                 │
//! │       ├── other ──► "Invalid choice" ─────────────────┘                 │
//! │       └── 7 ──► Exit                                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Write actions (add, remove, update) and search print a "being ..." line,
//! pause for the configured delay, then report completion.

use std::fmt;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::CliResult;
use supermarket_core::Product;
use supermarket_db::ProductRepository;

// =============================================================================
// Command
// =============================================================================

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    List,
    Update,
    Search,
    Filter,
    Exit,
}

impl Command {
    /// Every command in menu order.
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::Remove,
        Command::List,
        Command::Update,
        Command::Search,
        Command::Filter,
        Command::Exit,
    ];

    /// Maps a menu number (1-7) to its command.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Command::Add),
            2 => Some(Command::Remove),
            3 => Some(Command::List),
            4 => Some(Command::Update),
            5 => Some(Command::Search),
            6 => Some(Command::Filter),
            7 => Some(Command::Exit),
            _ => None,
        }
    }

    /// Menu number shown to the operator.
    pub fn number(self) -> u8 {
        match self {
            Command::Add => 1,
            Command::Remove => 2,
            Command::List => 3,
            Command::Update => 4,
            Command::Search => 5,
            Command::Filter => 6,
            Command::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Add => "Add product",
            Command::Remove => "Remove product",
            Command::List => "List All Products",
            Command::Update => "Update Product",
            Command::Search => "Search Product",
            Command::Filter => "Filter Product by price",
            Command::Exit => "Exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Renders the numbered menu, one command per line.
pub fn menu_text() -> String {
    Command::ALL
        .iter()
        .map(|command| command.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Menu
// =============================================================================

/// The interactive loop. Owns the console and a repository handle.
pub struct Menu<R, W> {
    products: ProductRepository,
    console: Console<R, W>,
    delay: Duration,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(products: ProductRepository, console: Console<R, W>, delay: Duration) -> Self {
        Menu {
            products,
            console,
            delay,
        }
    }

    /// Shows the menu and processes choices until Exit.
    ///
    /// Returns the first error (bad number, end of input, database failure).
    pub async fn run(&mut self) -> CliResult<()> {
        self.console.say(menu_text())?;
        self.console.say("")?;

        loop {
            let choice: i64 = self.console.prompt_number("Enter your choice: ", "choice")?;

            match Command::from_choice(choice) {
                Some(Command::Exit) => {
                    info!("Exit selected");
                    return Ok(());
                }
                Some(command) => self.dispatch(command).await?,
                None => {
                    debug!(choice, "Invalid menu choice");
                    self.console.say("Invalid choice")?;
                }
            }
        }
    }

    /// Runs the handler for one command.
    pub async fn dispatch(&mut self, command: Command) -> CliResult<()> {
        debug!(?command, "Dispatching");
        match command {
            Command::Add => self.add().await,
            Command::Remove => self.remove().await,
            Command::List => self.list().await,
            Command::Update => self.update().await,
            Command::Search => self.search().await,
            Command::Filter => self.filter().await,
            Command::Exit => Ok(()),
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    async fn add(&mut self) -> CliResult<()> {
        let name = self.console.prompt("Enter product name: ")?;
        let price: f64 = self.console.prompt_number("Enter product price: ", "price")?;
        let quantity: i64 = self.console.prompt_number("Enter product quantity: ", "quantity")?;
        let product = Product::new(name, price, quantity);

        self.console.say(format_args!("{} is being added", product.name))?;
        self.pause().await;
        self.products.add(&product).await?;
        info!(name = %product.name, "Product added");
        self.console.say(format_args!("{} is added", product.name))
    }

    async fn remove(&mut self) -> CliResult<()> {
        let name = self.console.prompt("Enter product name: ")?;

        self.console.say(format_args!("{} is being removed\n", name))?;
        self.pause().await;
        let removed = self.products.remove(&name).await?;
        info!(name = %name, rows = removed, "Product removed");
        self.console.say(format_args!("{} is removed\n", name))
    }

    async fn list(&mut self) -> CliResult<()> {
        let listing = self.products.list().await?;
        self.console.say(&listing)?;
        self.console.say("Listing products")?;
        self.console.say("Products are listed")
    }

    async fn update(&mut self) -> CliResult<()> {
        let name = self.console.prompt("Enter product name to update: ")?;
        let price: f64 = self
            .console
            .prompt_number("Enter product price to update: ", "price")?;
        let quantity: i64 = self
            .console
            .prompt_number("Enter product quantity to update: ", "quantity")?;
        let product = Product::new(name, price, quantity);

        self.console.say(format_args!("{} is being updated\n", product.name))?;
        self.pause().await;
        let updated = self.products.update(&product).await?;
        info!(name = %product.name, rows = updated, "Product updated");
        self.console.say(format_args!("{} is updated\n", product.name))
    }

    async fn search(&mut self) -> CliResult<()> {
        let name = self
            .console
            .prompt("Enter item name for searching products: ")?;

        self.console.say(format_args!("{} is being searched\n", name))?;
        self.pause().await;
        let listing = self.products.search(&name).await?;
        self.console.say(&listing)?;
        self.console.say(format_args!("{} are listed\n", name))
    }

    async fn filter(&mut self) -> CliResult<()> {
        self.console
            .say("Please select filter range for product you want to see")?;
        let min_price: f64 = self
            .console
            .prompt_number("Enter minimum price: ", "minimum price")?;
        let max_price: f64 = self
            .console
            .prompt_number("Enter maximum price: ", "maximum price")?;

        let listing = self.products.filter(min_price, max_price).await?;
        self.console.say(&listing)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Cursor;
    use supermarket_db::{Database, DbConfig};

    type TestMenu = Menu<Cursor<Vec<u8>>, Vec<u8>>;

    async fn menu_with(db: &Database, input: &str) -> TestMenu {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Menu::new(db.products(), console, Duration::ZERO)
    }

    fn output(menu: TestMenu) -> String {
        String::from_utf8(menu.into_console().into_output()).unwrap()
    }

    #[test]
    fn test_choice_mapping() {
        for command in Command::ALL {
            assert_eq!(Command::from_choice(command.number() as i64), Some(command));
        }
        assert_eq!(Command::from_choice(0), None);
        assert_eq!(Command::from_choice(8), None);
        assert_eq!(Command::from_choice(-1), None);
    }

    #[test]
    fn test_menu_text() {
        let text = menu_text();
        assert!(text.starts_with("1. Add product\n2. Remove product\n"));
        assert!(text.ends_with("6. Filter Product by price\n7. Exit"));
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "7\n").await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert!(out.contains("7. Exit"));
        assert!(out.ends_with("Enter your choice: "));
    }

    #[tokio::test]
    async fn test_invalid_choice_reprompts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "9\n0\n7\n").await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert_eq!(out.matches("Invalid choice").count(), 2);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[tokio::test]
    async fn test_non_numeric_choice_is_fatal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "add\n7\n").await;

        let err = menu.run().await.unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { field: "choice", .. }));
    }

    #[tokio::test]
    async fn test_eof_before_exit_is_fatal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "3\n").await;

        assert!(matches!(menu.run().await, Err(CliError::UnexpectedEof)));
    }

    #[tokio::test]
    async fn test_bad_price_aborts_before_insert() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "1\nMilk\ncheap\n10\n7\n").await;

        let err = menu.run().await.unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { field: "price", .. }));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "1\nMilk\n2.5\n10\n3\n7\n").await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert!(out.contains("Milk is being added\n"));
        assert!(out.contains("Milk is added\n"));
        assert!(out.contains(
            "Product Name: Milk\nProduct Price: 2.5 $\nProduct Quantity: 10\n \nListing products\nProducts are listed\n"
        ));
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "3\n7\n").await;

        menu.run().await.unwrap();

        assert!(output(menu).contains("No products in the supermarket\nListing products\n"));
    }

    #[tokio::test]
    async fn test_remove_and_update_absent_are_silent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut menu = menu_with(&db, "2\nGhost\n4\nGhost\n1.0\n1\n7\n").await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert!(out.contains("Ghost is removed\n"));
        assert!(out.contains("Ghost is updated\n"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filter_output() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (name, price) in [("a", 5.0), ("b", 10.0), ("c", 15.0), ("d", 20.0), ("e", 25.0)] {
            db.products().add(&Product::new(name, price, 1)).await.unwrap();
        }
        let mut menu = menu_with(&db, "6\n10\n20\n6\n100\n200\n7\n").await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert!(out.contains("Please select filter range for product you want to see\n"));
        assert!(out.contains("Product Name: b\n"));
        assert!(out.contains("Product Name: c\n"));
        assert!(out.contains("Product Name: d\n"));
        assert!(!out.contains("Product Name: a\n"));
        assert!(!out.contains("Product Name: e\n"));
        assert!(out.contains("No products found\n"));
    }

    #[tokio::test]
    async fn test_milk_scenario() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let script = "1\nMilk\n2.5\n10\n\
                      3\n\
                      4\nMilk\n3.0\n5\n\
                      5\nMilk\n\
                      2\nMilk\n\
                      5\nMilk\n\
                      7\n";
        let mut menu = menu_with(&db, script).await;

        menu.run().await.unwrap();

        let out = output(menu);
        assert!(out.contains("Product Name: Milk\nProduct Price: 2.5 $\nProduct Quantity: 10\n "));
        assert!(out.contains("Product Name: Milk\nProduct Price: 3.0 $\nProduct Quantity: 5\n "));
        assert!(out.contains("Milk is removed\n"));
        assert!(out.contains("Milk is being searched\n\nProduct not found\nMilk are listed\n"));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let console = Console::new(Cursor::new(b"2\nMilk\n7\n".to_vec()), Vec::new());
        let mut menu = Menu::new(db.products(), console, Duration::from_millis(50));

        let start = std::time::Instant::now();
        menu.run().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
