use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", dir.path())
        .env_remove("EXPENSE_LOG");
    cmd
}

#[test]
fn test_empty_ledger() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    expense(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout("PHP 0.00\n");
}

#[test]
fn test_add_list_and_total() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Rice", "300", "-c", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added."));
    expense(&dir)
        .args(["add", "Mug", "1250.5", "-c", "other", "-l", "Gift"])
        .assert()
        .success();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Gift"))
        .stdout(predicate::str::contains("PHP 1,550.50"));

    expense(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout("PHP 1,550.50\n");

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_add_rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Coffee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expense(&dir)
        .args(["add", "  ", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense name cannot be empty"));

    expense(&dir)
        .args(["add", "Coffee", "-3"])
        .assert()
        .failure();

    expense(&dir)
        .args(["add", "Coffee", "3", "-c", "snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: snacks"));

    expense(&dir)
        .arg("total")
        .assert()
        .stdout("PHP 0.00\n");
}

#[test]
fn test_entry_limit_blocks_large_expense() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["budget", "limit", "1000"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "Laptop", "45000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the per-entry limit"));

    expense(&dir)
        .args(["budget", "limit", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));
    expense(&dir)
        .args(["add", "Laptop", "45000"])
        .assert()
        .success();
}

#[test]
fn test_remove_by_position_and_id() {
    let dir = TempDir::new().unwrap();
    for (name, amount) in [("A", "1"), ("B", "2"), ("C", "4")] {
        expense(&dir).args(["add", name, amount]).assert().success();
    }

    expense(&dir)
        .args(["remove", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed A"))
        .stdout(predicate::str::contains("Removed C"))
        .stdout(predicate::str::contains("Total: PHP 2.00"));

    expense(&dir)
        .args(["remove", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 5"));

    expense(&dir).arg("total").assert().stdout("PHP 2.00\n");
}

#[test]
fn test_reset_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["add", "Rent", "900"]).assert().success();

    expense(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    expense(&dir).arg("total").assert().stdout("PHP 900.00\n");

    expense(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 expenses."));
    expense(&dir).arg("total").assert().stdout("PHP 0.00\n");
}

#[test]
fn test_budget_overview() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Data"))
        .stdout(predicate::str::contains(
            "Add some expenses to see your breakdown here.",
        ));

    expense(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PHP 1,000.00"));
    expense(&dir)
        .args(["add", "Rice", "300", "-c", "groceries"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "Power", "200", "-c", "electricity"])
        .assert()
        .success();

    expense(&dir)
        .args(["budget", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent:      PHP 500.00"))
        .stdout(predicate::str::contains("Remaining:  PHP 500.00"))
        .stdout(predicate::str::contains("Electricity"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn test_negative_budget_stored_as_zero() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["budget", "set", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PHP 0.00"));

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget:  (not set)"));
}

#[test]
fn test_label_grouping_splits_other() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["add", "Mug", "50", "-c", "other", "-l", "Gift"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "Pills", "80", "-c", "other", "-l", "Medicine"])
        .assert()
        .success();

    expense(&dir)
        .args(["budget", "overview", "--group-by", "label"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gift"))
        .stdout(predicate::str::contains("Medicine"));

    expense(&dir)
        .args(["budget", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"))
        .stdout(predicate::str::contains("Gift").not());
}

#[test]
fn test_reminders_follow_permission() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Rent", "900", "-r", "2999-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reminders enable"));
    expense(&dir)
        .args(["reminders", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming reminders."));

    expense(&dir).args(["reminders", "enable"]).assert().success();
    expense(&dir)
        .args(["add", "Internet", "1299", "-c", "internet", "-r", "2999-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder scheduled."));
    expense(&dir)
        .args(["reminders", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internet: 1299.00"));

    expense(&dir).args(["reset", "--yes"]).assert().success();
    expense(&dir)
        .args(["reminders", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming reminders."));
}

#[test]
fn test_past_reminder_is_skipped() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["reminders", "enable"]).assert().success();

    expense(&dir)
        .args(["add", "Rent", "900", "-r", "2001-01-01 09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already passed"));
}

#[test]
fn test_categories_listed() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscriptions"))
        .stdout(predicate::str::contains("creditcard.fill"));
}

#[test]
fn test_corrupt_settings_are_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let broken = "{ \"entry_limit\": 50.0,";
    std::fs::write(dir.path().join("config.json"), broken).unwrap();

    expense(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("config.json")).unwrap(),
        broken
    );

    // Read-only commands still work on defaults
    expense(&dir).arg("total").assert().success().stdout("PHP 0.00\n");
}

#[test]
fn test_corrupt_ledger_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("expenses.json"), "{ broken").unwrap();

    expense(&dir).arg("total").assert().success().stdout("PHP 0.00\n");
}
