//! Department descriptor model
//!
//! A department is described by data rather than by a dedicated record type:
//! its key, display name, default test list and the detail report printed on
//! detailed records.

use super::errors::RecordError;
use super::ids::DepartmentKey;
use super::record::PatientRecord;
use super::result::Result;
use std::fmt;
use std::sync::Arc;

/// Source of the department-specific lines printed on detailed reports
pub trait DetailReport: Send + Sync {
    /// Returns the detail lines, in print order
    fn lines(&self) -> Vec<String>;
}

impl<F> DetailReport for F
where
    F: Fn() -> Vec<String> + Send + Sync,
{
    fn lines(&self) -> Vec<String> {
        self()
    }
}

/// Detail report made of fixed text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CannedReport {
    lines: Vec<String>,
}

impl CannedReport {
    /// Creates a canned report from any list of lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl DetailReport for CannedReport {
    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}

/// Describes one medical department
///
/// Descriptors are immutable once built and are shared between the registry
/// and every record created for the department.
///
/// # Examples
///
/// ```
/// use medrec::domain::{CannedReport, DepartmentDescriptor};
///
/// let pediatrics = DepartmentDescriptor::new(
///     "pediatrics",
///     "Pediatrics",
///     ["Growth Assessment", "Vaccination Review"],
///     CannedReport::new(["Growth Percentile: 60th"]),
/// )
/// .unwrap();
/// assert_eq!(pediatrics.key().as_str(), "pediatrics");
/// ```
#[derive(Clone)]
pub struct DepartmentDescriptor {
    key: DepartmentKey,
    display_name: String,
    default_tests: Vec<String>,
    detail_report: Arc<dyn DetailReport>,
}

impl DepartmentDescriptor {
    /// Creates a new descriptor
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key or display name is blank, or if
    /// the default test list is empty
    pub fn new<I, S>(
        key: impl AsRef<str>,
        display_name: impl Into<String>,
        default_tests: I,
        detail_report: impl DetailReport + 'static,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = DepartmentKey::new(key)?;

        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(RecordError::Validation(format!(
                "Department '{key}' must have a display name"
            )));
        }

        let default_tests: Vec<String> = default_tests.into_iter().map(Into::into).collect();
        if default_tests.is_empty() {
            return Err(RecordError::Validation(format!(
                "Department '{key}' must list at least one default test"
            )));
        }

        Ok(Self {
            key,
            display_name,
            default_tests,
            detail_report: Arc::new(detail_report),
        })
    }

    /// Normalized lookup key
    pub fn key(&self) -> &DepartmentKey {
        &self.key
    }

    /// Name printed in record headers, e.g. "Cardiology"
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Tests every new record of this department starts with
    pub fn default_tests(&self) -> &[String] {
        &self.default_tests
    }

    /// Lines printed under the detailed report header
    pub fn detail_lines(&self) -> Vec<String> {
        self.detail_report.lines()
    }

    /// Assembles a descriptor from parts the caller has already checked
    pub(crate) fn from_parts(
        key: DepartmentKey,
        display_name: String,
        default_tests: Vec<String>,
        detail_report: Arc<dyn DetailReport>,
    ) -> Self {
        Self {
            key,
            display_name,
            default_tests,
            detail_report,
        }
    }

    /// Instantiates a blank record for this department
    ///
    /// The record has no name, no id and a summary report flag; the builder
    /// fills those in.
    pub fn create_record(descriptor: &Arc<Self>) -> PatientRecord {
        PatientRecord::blank(Arc::clone(descriptor))
    }
}

impl fmt::Debug for DepartmentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepartmentDescriptor")
            .field("key", &self.key)
            .field("display_name", &self.display_name)
            .field("default_tests", &self.default_tests)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DepartmentDescriptor {
        DepartmentDescriptor::new(
            "Pediatrics",
            "Pediatrics",
            ["Growth Assessment"],
            CannedReport::new(["Growth Percentile: 60th"]),
        )
        .unwrap()
    }

    #[test]
    fn test_descriptor_normalizes_key() {
        assert_eq!(sample().key().as_str(), "pediatrics");
        assert_eq!(sample().display_name(), "Pediatrics");
    }

    #[test]
    fn test_descriptor_rejects_blank_display_name() {
        let result = DepartmentDescriptor::new("x", "  ", ["A"], CannedReport::default());
        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[test]
    fn test_descriptor_rejects_empty_tests() {
        let result =
            DepartmentDescriptor::new("x", "X", Vec::<String>::new(), CannedReport::default());
        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[test]
    fn test_closure_detail_report() {
        let descriptor = DepartmentDescriptor::new("lab", "Lab", ["CBC"], || {
            vec!["Hemoglobin: 14 g/dL".to_string()]
        })
        .unwrap();
        assert_eq!(descriptor.detail_lines(), vec!["Hemoglobin: 14 g/dL"]);
    }

    #[test]
    fn test_create_record_is_blank() {
        let descriptor = Arc::new(sample());
        let record = DepartmentDescriptor::create_record(&descriptor);
        assert!(record.id().is_none());
        assert!(record.name().is_empty());
        assert!(!record.is_detailed());
        assert_eq!(record.tests(), ["Growth Assessment"]);
    }
}
