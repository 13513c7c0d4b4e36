//! Configuration management for medrec.
//!
//! # Overview
//!
//! medrec runs without any configuration file. When one is supplied it may:
//! - set the log level and enable a rolling JSON log file
//! - change the first record id issued
//! - register extra departments at startup
//!
//! Values may reference environment variables with `${VAR_NAME}`, and any
//! `MEDREC_<SECTION>_<KEY>` variable overrides the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [records]
//! id_start = 1000
//!
//! [[departments]]
//! key = "pediatrics"
//! display_name = "Pediatrics"
//! default_tests = ["Growth Assessment", "Vaccination Review"]
//! detail_lines = ["Growth Percentile: 60th", "Vaccinations: Up to date"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use medrec::config::load_config;
//!
//! # fn example() {
//! match load_config("medrec.toml") {
//!     Ok(config) => println!("{} extra departments", config.departments.len()),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, DepartmentConfig, LoggingConfig, MedrecConfig, RecordsConfig};
