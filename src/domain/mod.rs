//! Domain models and types for medrec.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`], [`DepartmentKey`])
//! - **Department descriptors** ([`DepartmentDescriptor`], [`DetailReport`], [`CannedReport`])
//! - **The record model** ([`PatientRecord`], [`RecordView`])
//! - **Error types** ([`RecordError`]) and the [`Result`] alias
//!
//! # Table-driven departments
//!
//! Every department uses the same [`PatientRecord`] shape. What differs between
//! departments (default tests, detail report text) lives in a
//! [`DepartmentDescriptor`]:
//!
//! ```rust
//! use medrec::domain::{CannedReport, DepartmentDescriptor};
//!
//! # fn example() -> medrec::domain::Result<()> {
//! let descriptor = DepartmentDescriptor::new(
//!     "radiology",
//!     "Radiology",
//!     ["CT Scan", "Ultrasound"],
//!     CannedReport::new(["CT Scan: Clear"]),
//! )?;
//! assert_eq!(descriptor.default_tests().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod department;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use department::{CannedReport, DepartmentDescriptor, DetailReport};
pub use errors::RecordError;
pub use ids::{DepartmentKey, RecordId};
pub use record::{PatientRecord, RecordView};
pub use result::Result;
