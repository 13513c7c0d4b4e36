//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MedrecConfig;
use crate::domain::errors::RecordError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedrecConfig
/// 4. Applies environment variable overrides (MEDREC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, parsing fails or validation fails
///
/// # Examples
///
/// ```no_run
/// use medrec::config::loader::load_config;
///
/// let config = load_config("medrec.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MedrecConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RecordError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RecordError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MedrecConfig = toml::from_str(&contents)
        .map_err(|e| RecordError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from a file if one is given, otherwise from defaults
///
/// Environment overrides and validation apply in both cases.
///
/// # Errors
///
/// See [`load_config`]
pub fn load_config_or_default(path: Option<&str>) -> Result<MedrecConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = MedrecConfig::default();
            finish(&mut config)?;
            Ok(config)
        }
    }
}

fn finish(config: &mut MedrecConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        RecordError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RecordError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RecordError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MEDREC_* prefix
///
/// Environment variables follow the pattern: MEDREC_<SECTION>_<KEY>
///
/// # Errors
///
/// Returns an error if a numeric override cannot be parsed
fn apply_env_overrides(config: &mut MedrecConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MEDREC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val.to_lowercase();
    }

    if let Ok(val) = std::env::var("MEDREC_RECORDS_ID_START") {
        config.records.id_start = val.parse().map_err(|_| {
            RecordError::Configuration(format!(
                "MEDREC_RECORDS_ID_START must be a non-negative integer, got '{val}'"
            ))
        })?;
    }

    if let Ok(val) = std::env::var("MEDREC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MEDREC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
