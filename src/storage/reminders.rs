//! Reminder outbox
//!
//! The command line has no notification center, so scheduled reminders are
//! kept in `data/reminders.json` for `expense reminders list` to show.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::ExpenseResult;
use crate::models::ExpenseId;
use crate::services::reminder::{Notifier, PermissionStatus, ReminderRequest};

use super::file_io::{read_json_or_default, write_json_atomic};

/// File backed [`Notifier`]
///
/// Permission comes from the user's settings; asking again cannot change it
/// because there is nobody to prompt.
pub struct OutboxNotifier {
    path: PathBuf,
    permission: PermissionStatus,
}

impl OutboxNotifier {
    pub fn new(path: PathBuf, permission: PermissionStatus) -> Self {
        Self { path, permission }
    }

    /// All reminders in the outbox, soonest first
    pub fn pending(&self) -> Vec<ReminderRequest> {
        let mut reminders: Vec<ReminderRequest> = read_json_or_default(&self.path);
        reminders.sort_by_key(|r| r.fires_at);
        reminders
    }

    /// Reminders that have not fired as of `now`
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<ReminderRequest> {
        self.pending()
            .into_iter()
            .filter(|r| r.fires_at > now)
            .collect()
    }

    fn save(&self, reminders: &[ReminderRequest]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, reminders)
    }
}

impl Notifier for OutboxNotifier {
    fn permission_status(&self) -> PermissionStatus {
        self.permission
    }

    fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    fn schedule_reminder(&self, request: &ReminderRequest) -> ExpenseResult<()> {
        let mut reminders = self.pending();
        reminders.retain(|r| r.id != request.id);
        reminders.push(request.clone());
        debug!(id = %request.id, fires_at = %request.fires_at, "reminder scheduled");
        self.save(&reminders)
    }

    fn cancel_reminder(&self, id: ExpenseId) -> ExpenseResult<()> {
        let mut reminders = self.pending();
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Ok(());
        }
        debug!(%id, "reminder cancelled");
        self.save(&reminders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn request(id: ExpenseId, fires_at: DateTime<Utc>) -> ReminderRequest {
        ReminderRequest {
            id,
            title: "Expense reminder".into(),
            body: "Rent: 900.00".into(),
            fires_at,
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    fn create_test_outbox() -> (TempDir, OutboxNotifier) {
        let temp_dir = TempDir::new().unwrap();
        let outbox = OutboxNotifier::new(
            temp_dir.path().join("data").join("reminders.json"),
            PermissionStatus::Granted,
        );
        (temp_dir, outbox)
    }

    #[test]
    fn test_empty_outbox() {
        let (_temp_dir, outbox) = create_test_outbox();
        assert!(outbox.pending().is_empty());
    }

    #[test]
    fn test_schedule_sorts_and_replaces() {
        let (_temp_dir, outbox) = create_test_outbox();
        let later = ExpenseId::new();
        let sooner = ExpenseId::new();

        outbox.schedule_reminder(&request(later, base() + Duration::days(3))).unwrap();
        outbox.schedule_reminder(&request(sooner, base() + Duration::days(1))).unwrap();
        // Rescheduling the same expense replaces its entry
        outbox.schedule_reminder(&request(later, base() + Duration::days(2))).unwrap();

        let pending = outbox.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id, sooner);
        assert_eq!(pending[1].id, later);
        assert_eq!(pending[1].fires_at, base() + Duration::days(2));
    }

    #[test]
    fn test_cancel() {
        let (_temp_dir, outbox) = create_test_outbox();
        let id = ExpenseId::new();
        outbox.schedule_reminder(&request(id, base())).unwrap();

        outbox.cancel_reminder(id).unwrap();
        assert!(outbox.pending().is_empty());
        // Unknown IDs are fine
        outbox.cancel_reminder(ExpenseId::new()).unwrap();
    }

    #[test]
    fn test_upcoming_hides_fired() {
        let (_temp_dir, outbox) = create_test_outbox();
        outbox.schedule_reminder(&request(ExpenseId::new(), base() - Duration::hours(1))).unwrap();
        outbox.schedule_reminder(&request(ExpenseId::new(), base() + Duration::hours(1))).unwrap();

        assert_eq!(outbox.pending().len(), 2);
        assert_eq!(outbox.upcoming(base()).len(), 1);
    }

    #[test]
    fn test_permission_is_configured_value() {
        let temp_dir = TempDir::new().unwrap();
        let outbox = OutboxNotifier::new(temp_dir.path().join("r.json"), PermissionStatus::Denied);
        assert_eq!(outbox.permission_status(), PermissionStatus::Denied);
        assert_eq!(outbox.request_permission(), PermissionStatus::Denied);
    }
}
