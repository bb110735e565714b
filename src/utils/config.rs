//! Configuration and constants for the dashboard.

use crate::parser::YearMonth;
use crate::utils::error::ConfigError;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Organization shown before anything is selected
pub const DEFAULT_ORGANIZATION: &str = "kubernetes";

/// Repository shown in drill-down views before any chart is clicked
pub const DEFAULT_REPOSITORY: &str = "kubernetes";

/// Number of repositories kept in the performance pie charts
pub const DEFAULT_TOP_N: usize = 10;
pub const MAX_TOP_N: usize = 1000;

/// Longest reporting window, configured or derived from the data
pub const MAX_WINDOW_MONTHS: usize = 600;

/// Dashboard configuration, usually loaded from `density.toml`
///
/// Every field is optional in the file; missing fields fall back to the
/// constants above.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Organization used when no organization is selected
    pub default_organization: String,

    /// Repository used when no chart point was clicked
    pub default_repository: String,

    /// Fixed reporting window; derived from the data when absent
    pub window: Option<WindowConfig>,

    /// Repositories kept in the top-N performance selection
    pub top_n: usize,

    /// Reference date used to age still-open PRs and issues.
    /// Defaults to the latest date present in the dataset.
    pub as_of: Option<NaiveDate>,
}

/// Reporting window declared in configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    /// First month of the window, e.g. `"2022-1"`
    pub start: YearMonth,

    /// Number of consecutive months
    pub months: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_organization: DEFAULT_ORGANIZATION.to_string(),
            default_repository: DEFAULT_REPOSITORY.to_string(),
            window: None,
            top_n: DEFAULT_TOP_N,
            as_of: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// * `ConfigError::IoError` - If file cannot be read
    /// * `ConfigError::ParseFailed` - If TOML is invalid
    /// * `ConfigError::InvalidValue` - If a value is out of range
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading dashboard config from: {}", path.display());

        let contents = fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_organization.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "default_organization cannot be empty".to_string(),
            ));
        }
        if self.default_repository.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "default_repository cannot be empty".to_string(),
            ));
        }
        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            return Err(ConfigError::InvalidValue(format!(
                "top_n must be between 1 and {}",
                MAX_TOP_N
            )));
        }
        if let Some(window) = &self.window {
            if window.months == 0 || window.months > MAX_WINDOW_MONTHS {
                return Err(ConfigError::InvalidValue(format!(
                    "window.months must be between 1 and {}",
                    MAX_WINDOW_MONTHS
                )));
            }
        }
        Ok(())
    }

    /// First month and length of the configured window, if any
    pub fn window_bounds(&self) -> Option<(YearMonth, usize)> {
        self.window.as_ref().map(|w| (w.start, w.months))
    }

    pub fn with_default_selection(
        mut self,
        organization: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        self.default_organization = organization.into();
        self.default_repository = repository.into();
        self
    }

    pub fn with_window(mut self, start: YearMonth, months: usize) -> Self {
        self.window = Some(WindowConfig { start, months });
        self
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.default_organization, "kubernetes");
        assert_eq!(config.default_repository, "kubernetes");
        assert_eq!(config.top_n, 10);
        assert!(config.window.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_organization = "cncf"
as_of = "2022-08-01"

[window]
start = "2022-1"
months = 7
"#
        )
        .unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.default_organization, "cncf");
        assert_eq!(config.default_repository, "kubernetes");
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2022, 8, 1));
        assert_eq!(
            config.window_bounds(),
            Some((YearMonth::new(2022, 1).unwrap(), 7))
        );
    }

    #[test]
    fn test_rejects_zero_top_n() {
        let config = DashboardConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_window_start() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nstart = \"January\"\nmonths = 3").unwrap();
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_rejects_empty_window() {
        let config = DashboardConfig::new().with_window(YearMonth::new(2022, 1).unwrap(), 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_window() {
        let start = YearMonth::new(2022, 1).unwrap();
        let config = DashboardConfig::new().with_window(start, MAX_WINDOW_MONTHS + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(config.with_window(start, MAX_WINDOW_MONTHS).validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "top_n = \"ten\"").unwrap();
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
