//! Budget aggregation
//!
//! Derives the monthly overview and the per-category breakdown from a
//! snapshot of the ledger plus the configured total budget. Everything here
//! is a pure function of its inputs: no I/O, no hidden state.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{BudgetOverview, CategoryGrouping, CategorySummary, ExpenseRecord};

/// Overall spent-to-budget ratio, clamped to [0, 1]; 0 when no budget is set
pub fn overall_progress(total_spent: f64, total_budget: f64) -> f64 {
    if total_budget > 0.0 {
        (total_spent / total_budget).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Budget left to spend, never negative
pub fn remaining(total_spent: f64, total_budget: f64) -> f64 {
    (total_budget - total_spent).max(0.0)
}

/// Number of days in a month of the proleptic Gregorian calendar
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
        _ => 0,
    }
}

/// Days remaining in `today`'s month, not counting today
pub fn days_left_in_month(today: NaiveDate) -> u32 {
    days_in_month(today.year(), today.month()).saturating_sub(today.day())
}

/// Sum of all amounts
pub fn total_spent(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Computes budget summaries for a configured total budget
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetAggregator {
    total_budget: f64,
    grouping: CategoryGrouping,
}

impl BudgetAggregator {
    /// Create an aggregator; a negative or non-finite budget counts as unset
    pub fn new(total_budget: f64, grouping: CategoryGrouping) -> Self {
        let total_budget = if total_budget.is_finite() {
            total_budget.max(0.0)
        } else {
            0.0
        };
        Self {
            total_budget,
            grouping,
        }
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn grouping(&self) -> CategoryGrouping {
        self.grouping
    }

    /// Per-category spend and limit, sorted by label
    ///
    /// Only categories with at least one record appear. Every present
    /// category shares the budget equally; with no budget each limit is 0.
    pub fn category_breakdown(&self, records: &[ExpenseRecord]) -> Vec<CategorySummary> {
        let mut buckets: BTreeMap<String, CategorySummary> = BTreeMap::new();

        for record in records {
            let (key, label) = match self.grouping {
                CategoryGrouping::Category => (
                    record.category.tag().to_string(),
                    record.category.display_name().to_string(),
                ),
                CategoryGrouping::Label => {
                    let label = record.display_type().to_string();
                    (label.clone(), label)
                }
            };

            let summary = buckets.entry(key.clone()).or_insert_with(|| CategorySummary {
                key,
                category: record.category,
                label,
                icon: record.category.icon().to_string(),
                spent: 0.0,
                limit: 0.0,
            });
            summary.spent += record.amount;

            // A label row shared by several categories shows the lowest one
            if record.category < summary.category {
                summary.category = record.category;
                summary.icon = record.category.icon().to_string();
            }
        }

        let limit = if self.total_budget > 0.0 && !buckets.is_empty() {
            self.total_budget / buckets.len() as f64
        } else {
            0.0
        };

        let mut summaries: Vec<CategorySummary> = buckets
            .into_values()
            .map(|mut summary| {
                summary.limit = limit;
                summary
            })
            .collect();
        summaries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.key.cmp(&b.key)));
        summaries
    }

    /// Full overview for the month containing `today`
    pub fn overview(&self, records: &[ExpenseRecord], today: NaiveDate) -> BudgetOverview {
        BudgetOverview {
            total_budget: self.total_budget,
            total_spent: total_spent(records),
            days_left: days_left_in_month(today),
            categories: self.category_breakdown(records),
        }
    }
}
