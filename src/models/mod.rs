//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain:
//! categories, expense records, and the derived budget summaries.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;

pub use budget::{BudgetOverview, CategoryGrouping, CategorySummary};
pub use category::{CategoryParseError, ExpenseCategory, ICON_PALETTE};
pub use expense::{ExpenseRecord, ValidationError};
pub use ids::ExpenseId;
