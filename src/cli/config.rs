//! Configuration management for BudgetBuddy
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.budgetbuddy/config.toml
//!
//! Every section is optional; anything left out falls back to the
//! built-in tables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{EstimatorError, Result};
use crate::estimate::BudgetEstimator;
use crate::input::InputLimits;
use crate::model::{
    validate_resources, DefaultResources, EfficiencyFactors, EffortDistribution, RateCard,
};

/// Complete configuration for BudgetBuddy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rates: RateCard,
    pub resources: DefaultResources,
    pub efficiency: EfficiencyFactors,
    pub distribution: EffortDistribution,
    pub limits: InputLimits,
    pub display: DisplayConfig,
    pub paths: PathsConfig,
}

/// Terminal display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_breakdown: bool,
}

/// File system paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub history_file: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_breakdown: false,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            history_file: "~/.budgetbuddy/history".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        debug!("no configuration file, using built-in tables");
        Ok(Config::default())
    }

    /// ~/.budgetbuddy/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".budgetbuddy").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.rates.validate()?;
        self.distribution.validate()?;
        validate_resources(&self.resources)?;

        for (role, factor) in self.efficiency.iter() {
            let values = [factor.min, factor.optimal, factor.max];
            if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(EstimatorError::ConfigError(format!(
                    "efficiency factors for {} must be positive numbers",
                    role
                )));
            }
        }

        if self.limits.max_staff == 0 {
            return Err(EstimatorError::ConfigError(
                "max_staff must be greater than 0".to_string()
            ));
        }

        if let Some((role, _)) = self.resources.iter().find(|(_, count)| **count > self.limits.max_staff) {
            return Err(EstimatorError::ConfigError(format!(
                "default headcount for {} exceeds max_staff ({})",
                role, self.limits.max_staff
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| EstimatorError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as TOML for display
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EstimatorError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Estimator using the configured tables
    pub fn estimator(&self) -> BudgetEstimator {
        BudgetEstimator::with_tables(
            self.rates.clone(),
            self.distribution.clone(),
            self.efficiency,
            self.resources,
        )
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get wizard history file path
    pub fn history_path(&self) -> PathBuf {
        Self::expand_path(&self.paths.history_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeploymentModel, Role};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rates.rate(DeploymentModel::Onshore, Role::Architect), 140.0);
        assert_eq!(config.resources.dev, 20);
        assert_eq!(config.limits.max_staff, 100);
        assert!(config.display.color_output);
    }

    #[test]
    fn test_config_validation_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_rate() {
        let mut config = Config::default();
        config.rates.offshore.lead_dev = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_baseline() {
        let mut config = Config::default();
        config.resources.architect = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_baseline_above_slider_max() {
        let mut config = Config::default();
        config.limits.max_staff = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_distribution() {
        let mut config = Config::default();
        config.distribution.high.architect = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[rates.offshore]\narchitect = 80.0\nleadDev = 55.0\ndev = 25.0\n",
        )
        .unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.rates.offshore.architect, 80.0);
        assert_eq!(config.rates.offshore.dev, 25.0);
        assert_eq!(config.rates.onshore.architect, 140.0);
        assert_eq!(config.resources.lead_dev, 10);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[resources]\narchitect = 0\nleadDev = 10\ndev = 20\n").unwrap();

        let err = Config::load(Some(path)).unwrap_err();
        assert!(matches!(err, EstimatorError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(temp_dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.rates.hybrid.dev = 33.0;
        config.save(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded.rates.hybrid.dev, 33.0);
        assert_eq!(reloaded.rates, config.rates);
    }

    #[test]
    fn test_estimator_uses_configured_rates() {
        let mut config = Config::default();
        config.rates.onshore = crate::model::RoleMap::new(1.0, 1.0, 1.0);
        let estimator = config.estimator();
        assert_eq!(estimator.rate_card().rate(DeploymentModel::Onshore, Role::Dev), 1.0);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = "~/.budgetbuddy";
        let expanded = Config::expand_path(path);
        assert!(!expanded.to_string_lossy().contains("~"));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        let expanded = Config::expand_path(path);
        assert_eq!(expanded.to_string_lossy(), path);
    }
}
