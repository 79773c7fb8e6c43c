use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::planner::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanDefaults,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Inputs used when a command does not pass them explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDefaults {
    #[serde(default = "default_five_k")]
    pub five_k: String,

    #[serde(default = "default_half_marathon_target")]
    pub half_marathon_target: String,

    #[serde(default = "default_weeks")]
    pub weeks: u32,

    #[serde(default = "default_run_days")]
    pub run_days_per_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

// Default value functions
fn default_five_k() -> String {
    "25:00".to_string()
}

fn default_half_marathon_target() -> String {
    "1:30:00".to_string()
}

fn default_weeks() -> u32 {
    12
}

fn default_run_days() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_file_name() -> String {
    crate::export::DEFAULT_FILE_NAME.to_string()
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            five_k: default_five_k(),
            half_marathon_target: default_half_marathon_target(),
            weeks: default_weeks(),
            run_days_per_week: default_run_days(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: default_true(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.hm-planner/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".hm-planner"))
    }

    /// Get config file path (~/.hm-planner/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from an explicit file, falling back to defaults
    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(config_dir) = config_file.parent() {
            fs::create_dir_all(config_dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_file, contents).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.plan.five_k, "25:00");
        assert_eq!(config.plan.half_marathon_target, "1:30:00");
        assert_eq!(config.plan.weeks, 12);
        assert_eq!(config.plan.run_days_per_week, 5);
        assert_eq!(config.ui.locale, Locale::ZhTw);
        assert_eq!(config.export.file_name, "half_marathon_plan.csv");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.plan.five_k, deserialized.plan.five_k);
        assert_eq!(config.ui.locale, deserialized.ui.locale);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("[ui]\nlocale = \"en\"\n\n[plan]\nweeks = 16\n").unwrap();
        assert_eq!(config.ui.locale, Locale::En);
        assert!(config.ui.color);
        assert_eq!(config.plan.weeks, 16);
        assert_eq!(config.plan.five_k, "25:00");
    }

    #[test]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.plan.run_days_per_week = 4;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.plan.run_days_per_week, 4);
        Ok(())
    }
}
