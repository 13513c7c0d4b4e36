//! Patient record builder
//!
//! Accumulates a patient name, a department and a report mode, then produces
//! a complete record stamped with an id from the shared generator.

use super::generator::RecordIdGenerator;
use crate::domain::{DepartmentDescriptor, PatientRecord, RecordError, Result};
use std::sync::Arc;

/// Builder for [`PatientRecord`] instances
///
/// Setters consume and return the builder; [`RecordBuilder::build`] only
/// borrows it, so one builder can produce several records or be
/// [`reset`](RecordBuilder::reset) and reused.
///
/// # Examples
///
/// ```
/// use medrec::core::{RecordBuilder, RecordIdGenerator};
/// use medrec::core::departments::neurology;
///
/// let ids = RecordIdGenerator::default();
/// let record = RecordBuilder::new()
///     .name("Salma")
///     .department(neurology())
///     .detailed()
///     .build(&ids)
///     .unwrap();
///
/// assert_eq!(record.id().map(|id| id.value()), Some(1000));
/// assert!(record.is_detailed());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordBuilder {
    name: Option<String>,
    department: Option<Arc<DepartmentDescriptor>>,
    detailed: bool,
}

impl RecordBuilder {
    /// Creates a new RecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the patient name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Selects the department whose descriptor creates the record
    pub fn department(mut self, department: Arc<DepartmentDescriptor>) -> Self {
        self.department = Some(department);
        self
    }

    /// Sets the report mode explicitly
    pub fn detailed_report(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Renders the department detail report
    pub fn detailed(self) -> Self {
        self.detailed_report(true)
    }

    /// Renders the summary only
    pub fn summary(self) -> Self {
        self.detailed_report(false)
    }

    /// Builds the record
    ///
    /// Validation happens before any id is drawn, so a failed build leaves
    /// the generator untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidState`] if no department is set or the
    /// patient name is empty, and [`RecordError::IdsExhausted`] if the
    /// generator has no ids left
    pub fn build(&self, ids: &RecordIdGenerator) -> Result<PatientRecord> {
        let department = self.department.as_ref().ok_or_else(|| {
            RecordError::InvalidState("department must be set before building".to_string())
        })?;

        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(RecordError::InvalidState(
                    "patient name must be set before building".to_string(),
                ))
            }
        };

        let mut record = DepartmentDescriptor::create_record(department);
        record.set_name(name);
        record.set_detailed(self.detailed);
        record.set_id(ids.next_id()?);
        Ok(record)
    }

    /// Clears all accumulated state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
