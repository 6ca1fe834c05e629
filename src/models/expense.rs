//! Expense record model
//!
//! An expense is an immutable value: once built it is appended to the ledger
//! and only ever removed, never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;

/// A single recorded expense
///
/// Field names on disk are kept stable (`type`, `customTypeLabel`,
/// `reminderDate`) so existing ledgers keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on (e.g. "Coffee")
    pub name: String,

    /// Category tag
    #[serde(rename = "type")]
    pub category: ExpenseCategory,

    /// Free-text label, only ever set when the category is `Other`
    #[serde(
        rename = "customTypeLabel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_label: Option<String>,

    /// Amount spent, currency-agnostic
    pub amount: f64,

    /// When a reminder notification should fire, if any
    #[serde(
        rename = "reminderDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reminder_at: Option<DateTime<Utc>>,

    /// Icon identifier, defaults to the category's icon
    pub icon: String,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh ID and the category's default icon
    pub fn new(name: impl Into<String>, category: ExpenseCategory, amount: f64) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            category,
            custom_label: None,
            amount,
            reminder_at: None,
            icon: category.icon().to_string(),
        }
    }

    /// Attach a custom label; ignored unless the category is `Other`
    pub fn with_custom_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.custom_label = if self.category == ExpenseCategory::Other {
            Some(label)
        } else {
            None
        };
        self
    }

    pub fn with_reminder(mut self, at: DateTime<Utc>) -> Self {
        self.reminder_at = Some(at);
        self
    }

    /// Override the icon; `None` keeps the category default
    pub fn with_icon(mut self, icon: Option<impl Into<String>>) -> Self {
        if let Some(icon) = icon {
            self.icon = icon.into();
        }
        self
    }

    /// Label shown to the user: the custom label for `Other` when present,
    /// otherwise the category's display name
    pub fn display_type(&self) -> &str {
        match (&self.category, &self.custom_label) {
            (ExpenseCategory::Other, Some(label)) if !label.is_empty() => label,
            _ => self.category.display_name(),
        }
    }

    /// Whether a reminder is set and still ahead of `now`
    pub fn has_pending_reminder(&self, now: DateTime<Utc>) -> bool {
        self.reminder_at.is_some_and(|at| at > now)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::InvalidAmount(self.amount.to_string()));
        }

        Ok(())
    }
}

/// Reasons a candidate expense is rejected
///
/// All of these are user-correctable; the presentation layer surfaces them
/// by refusing the submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Expense name cannot be empty")]
    EmptyName,

    #[error("Invalid amount: '{0}' is not a finite, non-negative number")]
    InvalidAmount(String),

    #[error("Amount {amount:.2} exceeds the per-entry limit of {limit:.2}")]
    ExceedsLimit { amount: f64, limit: f64 },
}
