//! Entry form validation
//!
//! Turning raw form input into an [`ExpenseRecord`] and deciding whether the
//! form may be submitted are kept apart: a draft can be a perfectly valid
//! record and still be blocked by the user's per-entry ceiling.

use chrono::{DateTime, Utc};

use crate::models::{ExpenseCategory, ExpenseRecord, ValidationError};

/// Raw, unvalidated input from the entry form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    /// Amount exactly as typed
    pub amount: String,
    pub category: ExpenseCategory,
    /// Only used when `category` is `Other`
    pub custom_label: String,
    /// Icon picked by the user, if any
    pub icon: Option<String>,
    pub reminder_at: Option<DateTime<Utc>>,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            category: ExpenseCategory::Bills,
            custom_label: String::new(),
            icon: None,
            reminder_at: None,
        }
    }
}

impl ExpenseDraft {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, category: ExpenseCategory) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
            ..Self::default()
        }
    }

    pub fn custom_label(mut self, label: impl Into<String>) -> Self {
        self.custom_label = label.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn reminder(mut self, at: DateTime<Utc>) -> Self {
        self.reminder_at = Some(at);
        self
    }

    /// Build a record from the draft
    ///
    /// The name is checked before the amount, so a form with both fields
    /// wrong reports `EmptyName`.
    pub fn build(&self) -> Result<ExpenseRecord, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let amount = parse_amount(&self.amount)?;

        let mut record = ExpenseRecord::new(name, self.category, amount).with_icon(self.icon.clone());

        let label = self.custom_label.trim();
        if self.category == ExpenseCategory::Other && !label.is_empty() {
            record = record.with_custom_label(label);
        }

        if let Some(at) = self.reminder_at {
            record = record.with_reminder(at);
        }

        record.validate()?;
        Ok(record)
    }
}

/// Parse a typed amount into a finite, non-negative number
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount(trimmed.to_string())),
    }
}

/// Enforce the optional per-entry ceiling
///
/// A limit that is absent or not positive disables the check.
pub fn check_entry_limit(amount: f64, limit: Option<f64>) -> Result<(), ValidationError> {
    match limit {
        Some(limit) if limit > 0.0 && amount > limit => {
            Err(ValidationError::ExceedsLimit { amount, limit })
        }
        _ => Ok(()),
    }
}

/// Whether the entry form's submit action should be enabled
pub fn can_submit(draft: &ExpenseDraft, limit: Option<f64>) -> bool {
    draft
        .build()
        .and_then(|record| check_entry_limit(record.amount, limit))
        .is_ok()
}
