//! Logging and observability
//!
//! Structured logging through `tracing`, with console output on stderr and an
//! optional rolling JSON log file.
//!
//! # Example
//!
//! ```no_run
//! use medrec::logging::init_logging;
//! use medrec::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log that a record was issued
///
/// Patient names are never logged; only the id, department and report mode.
///
/// # Example
///
/// ```no_run
/// use medrec::log_record_issued;
/// use medrec::core::{RecordContext, RecordService};
/// use std::sync::Arc;
///
/// let service = RecordService::new(Arc::new(RecordContext::default()));
/// let record = service.generate("neurology", "Karim", false).unwrap();
/// log_record_issued!(&record);
/// ```
#[macro_export]
macro_rules! log_record_issued {
    ($record:expr) => {
        tracing::info!(
            record_id = $record.id().map(|id| id.value()).unwrap_or_default(),
            department = %$record.department(),
            detailed = $record.is_detailed(),
            "Record issued"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use medrec::log_error_with_context;
/// use medrec::domain::RecordError;
///
/// let error = RecordError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
