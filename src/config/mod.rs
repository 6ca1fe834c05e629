//! Configuration module
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (budget figures and preferences)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
