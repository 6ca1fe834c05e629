//! Reminder outbox formatting

use chrono::Local;

use crate::services::reminder::{PermissionStatus, ReminderRequest};

pub fn format_reminder_list(reminders: &[ReminderRequest], permission: PermissionStatus) -> String {
    let mut output = format!("Reminder permission: {}\n\n", permission);

    if reminders.is_empty() {
        output.push_str("No upcoming reminders.\n");
        return output;
    }

    for reminder in reminders {
        output.push_str(&format!(
            "{}  {:12} {}\n",
            reminder.fires_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            reminder.id.short(),
            reminder.body
        ));
    }

    output
}
