//! Expense categories
//!
//! A fixed set of categories, each with a display name and a default icon.
//! `Other` is the escape hatch: records in it may carry a free-text label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Bills,
    Electricity,
    Internet,
    Groceries,
    Transport,
    Entertainment,
    Dining,
    Subscriptions,
    Other,
}

/// Icons offered by the entry form's icon picker
pub const ICON_PALETTE: [&str; 9] = [
    "doc.text",
    "bolt.fill",
    "wifi",
    "cart.fill",
    "car.fill",
    "gamecontroller.fill",
    "fork.knife",
    "creditcard.fill",
    "tag",
];

impl ExpenseCategory {
    /// All categories in picker order
    pub fn all() -> &'static [Self] {
        &[
            Self::Bills,
            Self::Electricity,
            Self::Internet,
            Self::Groceries,
            Self::Transport,
            Self::Entertainment,
            Self::Dining,
            Self::Subscriptions,
            Self::Other,
        ]
    }

    /// Every category except `Other`
    pub fn common() -> &'static [Self] {
        &Self::all()[..8]
    }

    /// Stable lowercase tag used in storage
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bills => "bills",
            Self::Electricity => "electricity",
            Self::Internet => "internet",
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Dining => "dining",
            Self::Subscriptions => "subscriptions",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bills => "Bills",
            Self::Electricity => "Electricity",
            Self::Internet => "Internet",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Dining => "Dining",
            Self::Subscriptions => "Subscriptions",
            Self::Other => "Other",
        }
    }

    /// Default icon identifier
    pub fn icon(&self) -> &'static str {
        ICON_PALETTE[*self as usize]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let category = match normalized.as_str() {
            "bills" => Self::Bills,
            "electricity" => Self::Electricity,
            "internet" => Self::Internet,
            "groceries" => Self::Groceries,
            "transport" | "transportation" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "dining" | "food" => Self::Dining,
            "subscriptions" | "subscription" => Self::Subscriptions,
            "other" => Self::Other,
            _ => return Err(CategoryParseError(s.trim().to_string())),
        };
        Ok(category)
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
