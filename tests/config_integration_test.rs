//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold ENV_MUTEX so they never
//! interleave within this test binary.

use medrec::config::{load_config, load_config_or_default};
use medrec::core::{RecordContext, RecordService};
use medrec::domain::RecordError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("MEDREC_APPLICATION_LOG_LEVEL");
    std::env::remove_var("MEDREC_RECORDS_ID_START");
    std::env::remove_var("MEDREC_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("MEDREC_LOGGING_LOCAL_PATH");
    std::env::remove_var("TEST_MEDREC_DEPARTMENT_NAME");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[records]
id_start = 2500

[[departments]]
key = "Pediatrics"
display_name = "Pediatrics"
default_tests = ["Growth Assessment", "Vaccination Review"]
detail_lines = ["Growth Percentile: 60th"]

[[departments]]
key = "radiology"
display_name = "Radiology"
default_tests = ["CT Scan"]

[logging]
local_enabled = false
local_path = "/tmp/medrec"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.records.id_start, 2500);
    assert_eq!(config.departments.len(), 2);
    assert!(config.departments[1].detail_lines.is_empty());
    assert_eq!(config.logging.local_path, "/tmp/medrec");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_configured_departments_reach_the_service() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[records]
id_start = 7000

[[departments]]
key = "Pediatrics"
display_name = "Pediatrics"
default_tests = ["Growth Assessment", "Vaccination Review"]
detail_lines = ["Growth Percentile: 60th", "Vaccinations: Up to date"]
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    let service = RecordService::new(RecordContext::from_config(&config).unwrap());

    let record = service.generate("PEDIATRICS", "Nadia", true).unwrap();
    assert_eq!(
        record.render_lines(),
        vec![
            "Record ID: 7000",
            "Pediatrics Record for Nadia",
            "Includes Growth Assessment, Vaccination Review",
            "--- Detailed Pediatrics Report ---",
            "Growth Percentile: 60th",
            "Vaccinations: Up to date",
        ]
    );
    assert!(service.has_department("cardiology"));
}

#[test]
fn test_configured_department_replaces_built_in() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[[departments]]
key = "cardiology"
display_name = "Cardiac Care"
default_tests = ["Echocardiogram"]
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    let service = RecordService::new(RecordContext::from_config(&config).unwrap());

    let record = service.generate("cardiology", "Rahim", false).unwrap();
    assert_eq!(record.render_lines()[1], "Cardiac Care Record for Rahim");
    assert_eq!(service.departments().len(), 4);
}

#[test]
fn test_defaults_without_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.records.id_start, 1000);
    assert_eq!(config.application.log_level, "warn");
    assert!(config.departments.is_empty());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_MEDREC_DEPARTMENT_NAME", "Oncology");

    let temp_file = write_config(
        r#"
[[departments]]
key = "oncology"
display_name = "${TEST_MEDREC_DEPARTMENT_NAME}"
default_tests = ["Biopsy"]
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.departments[0].display_name, "Oncology");

    cleanup_env_vars();
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MEDREC_APPLICATION_LOG_LEVEL", "ERROR");
    std::env::set_var("MEDREC_RECORDS_ID_START", "9000");

    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.application.log_level, "error");
    assert_eq!(config.records.id_start, 9000);

    cleanup_env_vars();
}

#[test]
fn test_invalid_id_start_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MEDREC_RECORDS_ID_START", "-5");

    let result = load_config_or_default(None);
    assert!(result.is_err());

    cleanup_env_vars();
}

#[test]
fn test_id_start_at_u64_max_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MEDREC_RECORDS_ID_START", u64::MAX.to_string());

    let err = load_config_or_default(None).unwrap_err();
    assert!(err.to_string().contains("records.id_start"));

    cleanup_env_vars();
}

#[test]
fn test_counter_near_max_fails_instead_of_wrapping() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("MEDREC_RECORDS_ID_START", (u64::MAX - 1).to_string());

    let config = load_config_or_default(None).unwrap();
    let service = RecordService::new(RecordContext::from_config(&config).unwrap());

    let last = service.generate("cardiology", "Rahim", false).unwrap();
    assert_eq!(last.id().map(|id| id.value()), Some(u64::MAX - 1));

    let err = service.generate("cardiology", "Karim", false).unwrap_err();
    assert!(matches!(err, RecordError::IdsExhausted(_)));
    assert!(!err.is_recoverable());

    let template = last.clone();
    assert!(matches!(
        service.generate_from_template(&template, "Ali"),
        Err(RecordError::IdsExhausted(_))
    ));

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"chatty\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid log_level"));
}

#[test]
fn test_duplicate_departments_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[[departments]]
key = "lab"
display_name = "Lab"
default_tests = ["CBC"]

[[departments]]
key = "LAB"
display_name = "Laboratory"
default_tests = ["CBC"]
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate department key"));
}
