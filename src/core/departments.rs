//! Built-in department table
//!
//! The four departments every registry starts with. Additional departments
//! come from configuration or from [`crate::core::RecordService::register_department`].

use crate::domain::{CannedReport, DepartmentDescriptor, DepartmentKey};
use std::sync::Arc;

struct BuiltIn {
    key: &'static str,
    display_name: &'static str,
    default_tests: &'static [&'static str],
    detail_lines: &'static [&'static str],
}

const BUILT_INS: &[BuiltIn] = &[
    BuiltIn {
        key: "cardiology",
        display_name: "Cardiology",
        default_tests: &["ECG", "Blood Pressure", "Cholesterol"],
        detail_lines: &[
            "Heart Rate: Normal",
            "Blood Pressure: 120/80 mmHg",
            "Cholesterol Level: Within normal range",
        ],
    },
    BuiltIn {
        key: "neurology",
        display_name: "Neurology",
        default_tests: &["MRI", "Cognitive Assessment"],
        detail_lines: &[
            "MRI Scan: No abnormalities detected",
            "Cognitive Score: 95/100",
            "Neurological Reflexes: Normal",
        ],
    },
    BuiltIn {
        key: "orthopedics",
        display_name: "Orthopedics",
        default_tests: &["X-ray", "Bone Density Test"],
        detail_lines: &[
            "X-ray Results: No fractures detected",
            "Bone Density: Normal for age group",
            "Joint Mobility: Full range of motion",
        ],
    },
    BuiltIn {
        key: "dermatology",
        display_name: "Dermatology",
        default_tests: &["Skin Biopsy", "Allergy Test", "UV Sensitivity Test"],
        detail_lines: &[
            "Skin Condition: Normal",
            "Allergy Test: No allergies detected",
            "UV Sensitivity: Low risk",
        ],
    },
];

impl BuiltIn {
    fn descriptor(&self) -> Arc<DepartmentDescriptor> {
        Arc::new(DepartmentDescriptor::from_parts(
            DepartmentKey::from_normalized(self.key),
            self.display_name.to_string(),
            self.default_tests.iter().map(|test| test.to_string()).collect(),
            Arc::new(CannedReport::new(self.detail_lines.iter().copied())),
        ))
    }
}

/// Descriptors for every built-in department, in registration order
pub fn built_in_departments() -> Vec<Arc<DepartmentDescriptor>> {
    BUILT_INS.iter().map(BuiltIn::descriptor).collect()
}

/// Cardiology descriptor
pub fn cardiology() -> Arc<DepartmentDescriptor> {
    BUILT_INS[0].descriptor()
}

/// Neurology descriptor
pub fn neurology() -> Arc<DepartmentDescriptor> {
    BUILT_INS[1].descriptor()
}

/// Orthopedics descriptor
pub fn orthopedics() -> Arc<DepartmentDescriptor> {
    BUILT_INS[2].descriptor()
}

/// Dermatology descriptor
pub fn dermatology() -> Arc<DepartmentDescriptor> {
    BUILT_INS[3].descriptor()
}
