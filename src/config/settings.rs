//! User settings
//!
//! Holds the budget configuration (total monthly budget and the optional
//! per-entry ceiling) alongside display and reminder preferences.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{CategoryGrouping, ValidationError};
use crate::services::reminder::PermissionStatus;
use crate::storage::file_io::{read_json_lenient, write_json_atomic, JsonRead};

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly budget; 0 means no budget has been set
    #[serde(default)]
    pub total_budget: f64,

    /// Largest amount accepted for a single expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_limit: Option<f64>,

    /// ISO 4217 code shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// How the budget breakdown groups records
    #[serde(default)]
    pub grouping: CategoryGrouping,

    /// Whether reminders may be delivered
    #[serde(default)]
    pub reminder_permission: PermissionStatus,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "PHP".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            total_budget: 0.0,
            entry_limit: None,
            currency_code: default_currency(),
            grouping: CategoryGrouping::default(),
            reminder_permission: PermissionStatus::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    ///
    /// An existing settings file that cannot be parsed is never overwritten,
    /// so values it still holds are not lost to defaults.
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        if let JsonRead::Corrupt(reason) = read_json_lenient::<Settings, _>(&settings_path) {
            return Err(ExpenseError::Config(format!(
                "Refusing to overwrite unreadable settings file ({}); fix or delete {}",
                reason,
                settings_path.display()
            )));
        }

        write_json_atomic(settings_path, self)
    }

    /// Set the monthly budget
    ///
    /// Negative input is stored as 0. Returns the stored value.
    pub fn set_total_budget(&mut self, amount: f64) -> Result<f64, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        self.total_budget = amount.max(0.0);
        Ok(self.total_budget)
    }

    /// Set or clear the per-entry ceiling
    pub fn set_entry_limit(&mut self, limit: Option<f64>) -> Result<(), ValidationError> {
        match limit {
            Some(value) if !value.is_finite() || value <= 0.0 => {
                Err(ValidationError::InvalidAmount(value.to_string()))
            }
            _ => {
                self.entry_limit = limit;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.total_budget, 0.0);
        assert!(settings.entry_limit.is_none());
        assert_eq!(settings.currency_code, "PHP");
        assert_eq!(settings.grouping, CategoryGrouping::Category);
        assert_eq!(settings.reminder_permission, PermissionStatus::Pending);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set_total_budget(25_000.0).unwrap();
        settings.set_entry_limit(Some(5_000.0)).unwrap();
        settings.grouping = CategoryGrouping::Label;
        settings.reminder_permission = PermissionStatus::Granted;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_older_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"total_budget": 800.0}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.total_budget, 800.0);
        assert_eq!(loaded.currency_code, "PHP");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ExpenseError::Config(_))
        ));
    }

    #[test]
    fn test_save_keeps_unparseable_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let broken = r#"{"total_budget": 800.0, "entry_limit": 50.0,"#;
        std::fs::write(paths.settings_file(), broken).unwrap();

        let mut settings = Settings::default();
        settings.set_total_budget(1_000.0).unwrap();

        assert!(matches!(settings.save(&paths), Err(ExpenseError::Config(_))));
        assert_eq!(std::fs::read_to_string(paths.settings_file()).unwrap(), broken);
    }

    #[test]
    fn test_negative_budget_clamped() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_total_budget(-50.0), Ok(0.0));
        assert_eq!(settings.total_budget, 0.0);
    }

    #[test]
    fn test_non_finite_budget_rejected() {
        let mut settings = Settings::default();
        settings.set_total_budget(100.0).unwrap();
        assert!(settings.set_total_budget(f64::NAN).is_err());
        assert!(settings.set_total_budget(f64::INFINITY).is_err());
        assert_eq!(settings.total_budget, 100.0);
    }

    #[test]
    fn test_entry_limit_must_be_positive() {
        let mut settings = Settings::default();
        assert!(settings.set_entry_limit(Some(0.0)).is_err());
        assert!(settings.set_entry_limit(Some(-1.0)).is_err());
        settings.set_entry_limit(Some(100.0)).unwrap();
        assert_eq!(settings.entry_limit, Some(100.0));
        settings.set_entry_limit(None).unwrap();
        assert!(settings.entry_limit.is_none());
    }
}
