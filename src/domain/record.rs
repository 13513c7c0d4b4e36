//! Patient record domain model
//!
//! One record shape serves every department; department-specific behaviour
//! comes from the shared [`DepartmentDescriptor`].

use super::department::DepartmentDescriptor;
use super::ids::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A patient record belonging to one department
///
/// `Clone` is the prototype operation: a clone owns its own name and test list,
/// so mutating it never affects the source record. The id is copied as-is;
/// callers that want a fresh identity re-stamp it with [`PatientRecord::set_id`].
///
/// # Examples
///
/// ```
/// use medrec::core::{RecordBuilder, RecordIdGenerator};
/// use medrec::core::departments::cardiology;
///
/// let ids = RecordIdGenerator::default();
/// let record = RecordBuilder::new()
///     .name("Rahim")
///     .department(cardiology())
///     .build(&ids)
///     .unwrap();
///
/// assert_eq!(record.render_lines()[1], "Cardiology Record for Rahim");
/// ```
#[derive(Debug, Clone)]
pub struct PatientRecord {
    id: Option<RecordId>,
    name: String,
    department: Arc<DepartmentDescriptor>,
    tests: Vec<String>,
    detailed: bool,
}

impl PatientRecord {
    /// Creates a record with the department defaults and nothing else set
    pub(crate) fn blank(department: Arc<DepartmentDescriptor>) -> Self {
        let tests = department.default_tests().to_vec();
        Self {
            id: None,
            name: String::new(),
            department,
            tests,
            detailed: false,
        }
    }

    /// Record id, if one has been assigned
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Stamps the record with an id, replacing any previous one
    pub fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    /// Patient name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the patient name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Department display name
    pub fn department(&self) -> &str {
        self.department.display_name()
    }

    /// Department descriptor the record was created from
    pub fn descriptor(&self) -> &Arc<DepartmentDescriptor> {
        &self.department
    }

    /// Ordered test list
    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Mutable access to the test list
    pub fn tests_mut(&mut self) -> &mut Vec<String> {
        &mut self.tests
    }

    /// Whether the detailed report section is rendered
    pub fn is_detailed(&self) -> bool {
        self.detailed
    }

    /// Switches between detailed and summary rendering
    pub fn set_detailed(&mut self, detailed: bool) {
        self.detailed = detailed;
    }

    /// Renders the record as human-readable lines
    ///
    /// Output is deterministic: id, header, test list and, for detailed
    /// records only, the department report header followed by its lines.
    pub fn render_lines(&self) -> Vec<String> {
        let id = self
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unassigned".to_string());

        let mut lines = vec![
            format!("Record ID: {id}"),
            format!("{} Record for {}", self.department(), self.name),
            format!("Includes {}", self.tests.join(", ")),
        ];

        if self.detailed {
            lines.push(format!("--- Detailed {} Report ---", self.department()));
            lines.extend(self.department.detail_lines());
        }

        lines
    }

    /// Serializable snapshot of the record
    pub fn view(&self) -> RecordView {
        RecordView {
            id: self.id,
            name: self.name.clone(),
            department: self.department().to_string(),
            department_key: self.department.key().to_string(),
            tests: self.tests.clone(),
            detailed: self.detailed,
            detail_lines: if self.detailed {
                self.department.detail_lines()
            } else {
                Vec::new()
            },
        }
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_lines().join("\n"))
    }
}

/// Flat, serializable view of a [`PatientRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    /// Record id (absent on unstamped records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Patient name
    pub name: String,

    /// Department display name
    pub department: String,

    /// Normalized department key
    pub department_key: String,

    /// Ordered test list
    pub tests: Vec<String>,

    /// Detailed report flag
    pub detailed: bool,

    /// Department report lines (empty for summary records)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail_lines: Vec<String>,
}
