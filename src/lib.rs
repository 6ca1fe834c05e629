//! Expense tracker core
//!
//! A ledger of expenses with a monthly budget breakdown, entry validation
//! and expense reminders. The binary in `main.rs` is a thin command line
//! front end over this library.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, budget summaries)
//! - `storage`: JSON file storage, the ledger and the reminder outbox
//! - `services`: Validation, budget aggregation and the expense workflow
//! - `clock`: Time source
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense::config::{ExpensePaths, Settings};
//! use expense::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths, &settings)?;
//! println!("{} expenses", storage.ledger.len());
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
