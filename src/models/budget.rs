//! Budget summary models
//!
//! These are derived values: they are recomputed from the ledger and the
//! configured total budget and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;

/// How records are bucketed into budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGrouping {
    /// Group by category tag; every `Other` record lands in one bucket
    #[default]
    Category,
    /// Group by the label the user sees, so each custom `Other` label
    /// becomes its own bucket
    Label,
}

impl fmt::Display for CategoryGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Label => write!(f, "label"),
        }
    }
}

impl FromStr for CategoryGrouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" | "type" | "tag" => Ok(Self::Category),
            "label" => Ok(Self::Label),
            other => Err(format!(
                "Unknown grouping '{}' (expected 'category' or 'label')",
                other
            )),
        }
    }
}

/// Spend against limit for one budget category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Grouping key: the category tag, or the label in label mode
    pub key: String,
    /// Category of the bucket; in label mode the lowest among its records
    pub category: ExpenseCategory,
    pub label: String,
    pub icon: String,
    pub spent: f64,
    pub limit: f64,
}

impl CategorySummary {
    /// Spent-to-limit ratio clamped to [0, 1]; 0 when there is no limit
    pub fn progress(&self) -> f64 {
        if self.limit > 0.0 {
            (self.spent / self.limit).min(1.0)
        } else {
            0.0
        }
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }

    /// Headroom left under the limit, never negative
    pub fn remaining(&self) -> f64 {
        (self.limit - self.spent).max(0.0)
    }

    /// How far past the limit spending went, 0 when within it
    pub fn over_by(&self) -> f64 {
        if self.is_over() {
            self.spent - self.limit
        } else {
            0.0
        }
    }
}

/// Monthly budget overview
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
    pub days_left: u32,
    pub categories: Vec<CategorySummary>,
}

impl BudgetOverview {
    pub fn overall_progress(&self) -> f64 {
        crate::services::budget::overall_progress(self.total_spent, self.total_budget)
    }

    pub fn remaining(&self) -> f64 {
        crate::services::budget::remaining(self.total_spent, self.total_budget)
    }

    /// Spending has reached or passed a configured budget
    pub fn is_over_budget(&self) -> bool {
        self.total_budget > 0.0 && self.overall_progress() >= 1.0
    }

    /// No spending recorded at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
