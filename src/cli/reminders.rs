//! Reminder CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::format_reminder_list;
use crate::error::ExpenseResult;
use crate::services::PermissionStatus;
use crate::storage::Storage;

/// Reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Show reminders that have not fired yet
    List,
    /// Allow reminders to be scheduled
    Enable,
    /// Stop scheduling reminders
    Disable,
}

pub fn handle_reminder_command(
    storage: &Storage,
    settings: &mut Settings,
    clock: &dyn Clock,
    cmd: ReminderCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReminderCommands::List => {
            let upcoming = storage.reminders.upcoming(clock.now());
            print!(
                "{}",
                format_reminder_list(&upcoming, settings.reminder_permission)
            );
        }
        ReminderCommands::Enable => {
            settings.reminder_permission = PermissionStatus::Granted;
            settings.save(storage.paths())?;
            println!("Reminders enabled.");
        }
        ReminderCommands::Disable => {
            settings.reminder_permission = PermissionStatus::Denied;
            settings.save(storage.paths())?;
            println!("Reminders disabled. Already scheduled reminders are kept.");
        }
    }

    Ok(())
}
