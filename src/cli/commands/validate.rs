//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! a medrec configuration file.

use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<built-in defaults>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        // Loading validates as its last step
        match load_config_or_default(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  First Record ID: {}", config.records.id_start);
                println!("  File Logging: {}", config.logging.local_enabled);
                if config.departments.is_empty() {
                    println!("  Extra Departments: none");
                } else {
                    let keys: Vec<&str> =
                        config.departments.iter().map(|d| d.key.as_str()).collect();
                    println!("  Extra Departments: {}", keys.join(", "));
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute(Some("definitely-missing-medrec.toml"))
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_invalid_department() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[departments]]\nkey = \"x\"\ndisplay_name = \"X\"\ndefault_tests = []\n")
            .unwrap();
        temp_file.flush().unwrap();

        let path = temp_file.path().to_string_lossy().to_string();
        assert_eq!(ValidateArgs {}.execute(Some(&path)).unwrap(), 2);
    }
}
