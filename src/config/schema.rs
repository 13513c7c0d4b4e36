//! Configuration schema types
//!
//! This module defines the configuration structure for medrec. Every section
//! is optional; an empty file yields the built-in defaults.

use crate::core::generator::DEFAULT_ID_START;
use crate::domain::{CannedReport, DepartmentDescriptor, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main medrec configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedrecConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Record numbering settings
    #[serde(default)]
    pub records: RecordsConfig,

    /// Extra departments registered at startup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<DepartmentConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MedrecConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.records.validate()?;
        self.logging.validate()?;

        let mut seen = HashSet::new();
        for department in &self.departments {
            department.validate()?;
            let key = department.key.trim().to_lowercase();
            if !seen.insert(key.clone()) {
                return Err(format!("Duplicate department key '{key}'"));
            }
        }

        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Record numbering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// First record id issued by the shared counter
    #[serde(default = "default_id_start")]
    pub id_start: u64,
}

impl RecordsConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.id_start == u64::MAX {
            return Err(format!("records.id_start must be below {}", u64::MAX));
        }
        Ok(())
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            id_start: default_id_start(),
        }
    }
}

/// A department defined in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentConfig {
    /// Lookup key (case-insensitive)
    pub key: String,

    /// Name printed in record headers
    pub display_name: String,

    /// Tests every record of the department starts with
    pub default_tests: Vec<String>,

    /// Lines printed on detailed reports
    #[serde(default)]
    pub detail_lines: Vec<String>,
}

impl DepartmentConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("departments.key cannot be empty".to_string());
        }
        if self.display_name.trim().is_empty() {
            return Err(format!(
                "departments.display_name cannot be empty (key '{}')",
                self.key
            ));
        }
        if self.default_tests.is_empty() {
            return Err(format!(
                "departments.default_tests must list at least one test (key '{}')",
                self.key
            ));
        }
        Ok(())
    }

    /// Converts the entry into a department descriptor
    ///
    /// # Errors
    ///
    /// Returns a validation error if the entry is incomplete
    pub fn to_descriptor(&self) -> Result<DepartmentDescriptor> {
        DepartmentDescriptor::new(
            &self.key,
            self.display_name.clone(),
            self.default_tests.iter().cloned(),
            CannedReport::new(self.detail_lines.iter().cloned()),
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_id_start() -> u64 {
    DEFAULT_ID_START
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pediatrics() -> DepartmentConfig {
        DepartmentConfig {
            key: "pediatrics".to_string(),
            display_name: "Pediatrics".to_string(),
            default_tests: vec!["Growth Assessment".to_string()],
            detail_lines: vec!["Growth Percentile: 60th".to_string()],
        }
    }

    #[test]
    fn test_default_values() {
        let config = MedrecConfig::default();
        assert_eq!(config.application.log_level, "warn");
        assert_eq!(config.records.id_start, 1000);
        assert!(config.departments.is_empty());
        assert!(!config.logging.local_enabled);
        assert_eq!(config.logging.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: MedrecConfig = toml::from_str("").unwrap();
        assert_eq!(config, MedrecConfig::default());
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_records_config_rejects_max_start() {
        let mut config = RecordsConfig::default();
        config.id_start = u64::MAX - 1;
        assert!(config.validate().is_ok());

        config.id_start = u64::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.contains("records.id_start"));
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        config.local_rotation = "size".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_department_validation() {
        let mut department = pediatrics();
        assert!(department.validate().is_ok());

        department.default_tests.clear();
        assert!(department.validate().is_err());

        let mut department = pediatrics();
        department.display_name = String::new();
        assert!(department.validate().is_err());
    }

    #[test]
    fn test_duplicate_department_keys_rejected() {
        let mut shouting = pediatrics();
        shouting.key = "PEDIATRICS".to_string();
        let config = MedrecConfig {
            departments: vec![pediatrics(), shouting],
            ..MedrecConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("Duplicate department key"));
    }

    #[test]
    fn test_department_to_descriptor() {
        let descriptor = pediatrics().to_descriptor().unwrap();
        assert_eq!(descriptor.key().as_str(), "pediatrics");
        assert_eq!(descriptor.detail_lines(), ["Growth Percentile: 60th"]);
    }
}
