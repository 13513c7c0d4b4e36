//! Patient record service
//!
//! Orchestrates registry lookup, building and prototype cloning against a
//! shared [`RecordContext`].

use super::builder::RecordBuilder;
use super::context::RecordContext;
use crate::domain::{DepartmentDescriptor, PatientRecord, RecordError, Result};
use crate::{log_error_with_context, log_record_issued};
use std::sync::Arc;

/// Record generation service
///
/// # Examples
///
/// ```
/// use medrec::core::{RecordContext, RecordService};
/// use std::sync::Arc;
///
/// let service = RecordService::new(Arc::new(RecordContext::default()));
/// let record = service.generate("cardiology", "Rahim", false).unwrap();
/// assert_eq!(record.render_lines()[0], "Record ID: 1000");
///
/// assert!(service.generate("unknown", "Test Patient", false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RecordService {
    context: Arc<RecordContext>,
}

impl RecordService {
    /// Create a service over a shared context
    pub fn new(context: Arc<RecordContext>) -> Self {
        Self { context }
    }

    /// Shared context backing this service
    pub fn context(&self) -> &Arc<RecordContext> {
        &self.context
    }

    /// Generate a record for a department
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownDepartment`] if the department is not
    /// registered; no id is consumed in that case
    pub fn generate(&self, department: &str, name: &str, detailed: bool) -> Result<PatientRecord> {
        let descriptor = match self.context.registry().lookup(department) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!(department = %department, "Unknown department requested");
                return Err(e);
            }
        };

        let record = RecordBuilder::new()
            .name(name)
            .department(descriptor)
            .detailed_report(detailed)
            .build(self.context.ids())
            .inspect_err(|e| {
                log_error_with_context!(e, "Failed to build record");
            })?;

        log_record_issued!(&record);
        Ok(record)
    }

    /// Generate a summary record for a department
    ///
    /// # Errors
    ///
    /// See [`RecordService::generate`]
    pub fn generate_summary(&self, department: &str, name: &str) -> Result<PatientRecord> {
        self.generate(department, name, false)
    }

    /// Generate a record by cloning a template
    ///
    /// The clone takes the new name and a fresh id; every other field is
    /// copied from the template, which is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidState`] if the new name is empty, and
    /// [`RecordError::IdsExhausted`] if no ids are left
    pub fn generate_from_template(
        &self,
        template: &PatientRecord,
        new_name: &str,
    ) -> Result<PatientRecord> {
        if new_name.trim().is_empty() {
            return Err(RecordError::InvalidState(
                "patient name must be set before cloning".to_string(),
            ));
        }

        let mut record = template.clone();
        record.set_name(new_name);
        record.set_id(self.context.ids().next_id()?);

        log_record_issued!(&record);
        Ok(record)
    }

    /// Register a department at runtime
    ///
    /// Returns the descriptor previously registered under the same key.
    pub fn register_department(
        &self,
        descriptor: Arc<DepartmentDescriptor>,
    ) -> Option<Arc<DepartmentDescriptor>> {
        tracing::info!(department = %descriptor.key(), "Registering department");
        self.context.registry().register(descriptor)
    }

    /// Whether a department is registered
    pub fn has_department(&self, department: &str) -> bool {
        self.context.registry().has(department)
    }

    /// Registered departments sorted by key
    pub fn departments(&self) -> Vec<Arc<DepartmentDescriptor>> {
        self.context.registry().departments()
    }
}
