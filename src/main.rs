use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use expense::cli::{
    handle_budget_command, handle_expense_command, handle_reminder_command, BudgetCommands,
    ExpenseCommands, ReminderCommands,
};
use expense::clock::SystemClock;
use expense::config::{ExpensePaths, Settings};
use expense::display::format_amount;
use expense::logging::init_tracing;
use expense::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "Record what you spend, see where it goes by category, and keep \
                  an eye on how much of this month's budget is left."
)]
struct Cli {
    /// Directory holding settings and data
    #[arg(long, global = true, env = "EXPENSE_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Budget configuration and overview
    Budget {
        #[command(subcommand)]
        command: Option<BudgetCommands>,
    },

    /// Expense reminders
    #[command(subcommand)]
    Reminders(ReminderCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        warn!(error = %e, "using default settings; the settings file will not be overwritten");
        Settings::default()
    });

    let storage = Storage::open(paths.clone(), &settings)?;
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Budget { command }) => {
            handle_budget_command(&storage, &mut settings, &clock, command)?;
        }
        Some(Commands::Reminders(cmd)) => {
            handle_reminder_command(&storage, &mut settings, &clock, cmd)?;
        }
        Some(Commands::Config) => {
            let currency = settings.currency_code.as_str();
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Reminders file:  {}", paths.reminders_file().display());
            println!();
            println!("Settings:");
            if settings.total_budget > 0.0 {
                println!(
                    "  Monthly budget:  {}",
                    format_amount(settings.total_budget, currency)
                );
            } else {
                println!("  Monthly budget:  (not set)");
            }
            match settings.entry_limit {
                Some(limit) => println!("  Entry limit:     {}", format_amount(limit, currency)),
                None => println!("  Entry limit:     (none)"),
            }
            println!("  Currency:        {}", currency);
            println!("  Grouping:        {}", settings.grouping);
            println!("  Reminders:       {}", settings.reminder_permission);
        }
        None => {
            println!("Expense Tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add <NAME> <AMOUNT>' to record an expense.");
        }
    }

    Ok(())
}
