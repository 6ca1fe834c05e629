//! Reminder scheduling
//!
//! Delivery belongs to the host (an OS notification center, or the CLI's
//! outbox file). This module owns only the policy: when a reminder is worth
//! scheduling and how the single permission prompt is handled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExpenseResult;
use crate::models::{ExpenseId, ExpenseRecord};

/// Whether the user allows reminder notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Not asked yet
    #[default]
    Pending,
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// A notification to deliver at `fires_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRequest {
    /// The owning expense; also identifies the reminder for cancellation
    pub id: ExpenseId,
    pub title: String,
    pub body: String,
    pub fires_at: DateTime<Utc>,
}

impl ReminderRequest {
    /// Build the reminder for a record, if it has a reminder time
    pub fn for_record(record: &ExpenseRecord) -> Option<Self> {
        record.reminder_at.map(|fires_at| Self {
            id: record.id,
            title: "Expense reminder".to_string(),
            body: format!("{}: {:.2}", record.name, record.amount),
            fires_at,
        })
    }
}

/// Host notification facility
pub trait Notifier {
    /// Current permission, without prompting
    fn permission_status(&self) -> PermissionStatus;

    /// Prompt the user once and report the answer
    fn request_permission(&self) -> PermissionStatus;

    fn schedule_reminder(&self, request: &ReminderRequest) -> ExpenseResult<()>;

    /// Cancel a pending reminder; unknown IDs are not an error
    fn cancel_reminder(&self, id: ExpenseId) -> ExpenseResult<()>;
}

/// What happened when a record's reminder was considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    Scheduled,
    /// The record has no reminder time
    NoReminder,
    /// The reminder time is not in the future
    InPast,
    PermissionDenied,
    /// The user has not answered the permission prompt
    PermissionPending,
}

/// Schedule a record's reminder if it is in the future and permitted
///
/// A pending permission triggers exactly one prompt; whatever it answers is
/// final for this call.
pub fn schedule_reminder_for(
    notifier: &dyn Notifier,
    record: &ExpenseRecord,
    now: DateTime<Utc>,
) -> ExpenseResult<ReminderOutcome> {
    let Some(request) = ReminderRequest::for_record(record) else {
        return Ok(ReminderOutcome::NoReminder);
    };

    if request.fires_at <= now {
        return Ok(ReminderOutcome::InPast);
    }

    let status = match notifier.permission_status() {
        PermissionStatus::Pending => notifier.request_permission(),
        status => status,
    };

    match status {
        PermissionStatus::Granted => {
            notifier.schedule_reminder(&request)?;
            Ok(ReminderOutcome::Scheduled)
        }
        PermissionStatus::Denied => Ok(ReminderOutcome::PermissionDenied),
        PermissionStatus::Pending => Ok(ReminderOutcome::PermissionPending),
    }
}
