use crate::core::finance::ZeroRateEmi;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "USD".to_string()
}

fn default_compounding_frequency() -> u32 {
    12
}

fn default_recent_transfers() -> usize {
    5
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub zero_rate_emi: ZeroRateEmi,
    #[serde(default = "default_compounding_frequency")]
    pub compounding_frequency: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            zero_rate_emi: ZeroRateEmi::default(),
            compounding_frequency: default_compounding_frequency(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_transfers")]
    pub recent_transfers: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            recent_transfers: default_recent_transfers(),
        }
    }
}

/// Trims a caller identity and rejects empty ones or ones with control
/// characters, which would collide in the store's `caller NUL ...` keys.
pub fn validate_caller(caller: &str) -> Result<String> {
    let caller = caller.trim();
    if caller.is_empty() {
        anyhow::bail!("Caller must not be empty");
    }
    if caller.chars().any(char::is_control) {
        anyhow::bail!("Caller must not contain control characters");
    }
    Ok(caller.to_string())
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Identity used for every backend call.
    pub caller: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub data_path: Option<String>,
    #[serde(default)]
    pub calculators: CalculatorConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "bankdesk", "bankdesk")
            .context("Could not determine project directories")
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.yaml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.caller = validate_caller(&config.caller)
            .with_context(|| format!("Invalid caller in config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
caller: "alice"
currency: "INR"
data_path: "/tmp/bankdesk"
calculators:
  zero_rate_emi: zero
  compounding_frequency: 4
dashboard:
  recent_transfers: 3
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.caller, "alice");
        assert_eq!(config.currency, "INR");
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/bankdesk"));
        assert_eq!(config.calculators.zero_rate_emi, ZeroRateEmi::Zero);
        assert_eq!(config.calculators.compounding_frequency, 4);
        assert_eq!(config.dashboard.recent_transfers, 3);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("caller: bob\n").unwrap();
        assert_eq!(config.currency, "USD");
        assert!(config.data_path.is_none());
        assert_eq!(config.calculators, CalculatorConfig::default());
        assert_eq!(config.calculators.zero_rate_emi, ZeroRateEmi::Amortize);
        assert_eq!(config.calculators.compounding_frequency, 12);
        assert_eq!(config.dashboard.recent_transfers, 5);
    }

    #[test]
    fn test_load_from_path_rejects_blank_caller() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "caller: '  '").unwrap();
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid caller"));
        assert_eq!(err.root_cause().to_string(), "Caller must not be empty");
    }

    #[test]
    fn test_caller_with_control_characters_is_rejected() {
        assert_eq!(validate_caller("  alice ").unwrap(), "alice");
        assert!(validate_caller("alice\0x").is_err());
        assert!(validate_caller("bob\tsmith").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "caller: \"alice\\0x\"").unwrap();
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Caller must not contain control characters"
        );
    }

    #[test]
    fn test_load_from_missing_path_has_context() {
        let err = AppConfig::load_from_path("/nonexistent/bankdesk.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
