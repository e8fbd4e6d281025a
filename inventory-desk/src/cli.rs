//! Command line interface
//!
//! The same [`Command`] set drives one-shot invocations and the interactive
//! shell, where each line is parsed with [`ShellLine`].

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use inventory_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use rust_decimal::Decimal;

/// Default data directory for the session file and logs
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Parser)]
#[command(name = "inventory-desk", about = "Smart Inventory desk", long_about = None)]
pub struct Cli {
    /// Inventory API base URL
    #[arg(long, env = "INVENTORY_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "INVENTORY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Directory holding the session file and logs
    #[arg(long, env = "INVENTORY_DATA_DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

    /// Also print logs to the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run a single command; without one the interactive shell starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One line typed into the interactive shell
#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the pages available to the signed-in user
    Menu,
    /// Business overview
    Dashboard,
    /// Product catalogue
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Customer records
    #[command(subcommand)]
    Customers(CustomersCommand),
    /// Supplier records
    #[command(subcommand)]
    Suppliers(SuppliersCommand),
    /// Past sales and receipts
    #[command(subcommand)]
    Sales(SalesCommand),
    /// Ring up a new sale
    NewSale,
    /// Sales report for a date range
    Reports(ReportArgs),
    /// Look up a product by SKU
    Scan { sku: String },
    /// User accounts and roles
    #[command(subcommand)]
    Users(UsersCommand),
    /// Profile, password and business settings
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Leave the interactive shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products, optionally filtered by name or SKU
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Products running low on stock
    LowStock,
    /// Add a product
    Add(ProductFields),
    /// Edit a product; omitted fields keep their value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        id: i64,
        /// Skip the confirmation question
        #[arg(long)]
        yes: bool,
    },
    /// Import products from a CSV file
    Import { file: Option<PathBuf> },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub price: Option<Decimal>,
    #[arg(long)]
    pub cost_price: Option<Decimal>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers, optionally filtered by name or email
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a customer
    Add(ContactFields),
    /// Edit a customer; omitted fields keep their value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a customer
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SuppliersCommand {
    /// List suppliers, optionally filtered by name or email
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a supplier
    Add(SupplierFields),
    /// Edit a supplier; omitted fields keep their value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: SupplierFields,
    },
    /// Delete a supplier
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ContactFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

impl ContactFields {
    /// No field given on the command line
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SupplierFields {
    #[command(flatten)]
    pub contact: ContactFields,
    #[arg(long)]
    pub contact_person: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SalesCommand {
    /// Sales history, optionally searched server side
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Items of one sale
    Show { id: i64 },
    /// Print the receipt of one sale
    Receipt {
        id: i64,
        /// Write the receipt to a file instead of the terminal
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// First day of the range (defaults to the first of this month)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day of the range (defaults to today)
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Directory to write the CSV export into
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    List,
    /// Switch a user between admin and user
    ToggleRole { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the business settings and signed-in identity
    Show,
    /// Change username and email (signs out afterwards)
    Profile {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change the password
    Password,
    /// Edit the business header used on receipts
    Business {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Erase all business data
    FactoryReset,
}

/// Split a shell line into words, honouring double quotes
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err("Unterminated quote".to_string());
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}
