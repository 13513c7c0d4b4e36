//! Core business logic for medrec.
//!
//! # Modules
//!
//! - [`generator`] - Shared, monotonic record id counter
//! - [`departments`] - Built-in department table
//! - [`registry`] - Case-insensitive department registry
//! - [`builder`] - Step-by-step record construction
//! - [`context`] - The one generator and one registry of a running system
//! - [`service`] - Lookup, build and template cloning
//! - [`demo`] - Fixed demonstration sequence
//!
//! # Record Workflow
//!
//! 1. **Lookup**: resolve the department key in the [`FactoryRegistry`]
//! 2. **Build**: the [`RecordBuilder`] validates its state and asks the
//!    department descriptor for a blank record
//! 3. **Stamp**: the record receives the next id from the [`RecordIdGenerator`]
//! 4. **Render**: the caller prints [`crate::domain::PatientRecord::render_lines`]
//!
//! # Example
//!
//! ```rust
//! use medrec::core::{RecordContext, RecordService};
//! use std::sync::Arc;
//!
//! # fn example() -> medrec::domain::Result<()> {
//! let service = RecordService::new(Arc::new(RecordContext::default()));
//!
//! let template = service.generate("cardiology", "Template Patient", true)?;
//! let ali = service.generate_from_template(&template, "Ali")?;
//!
//! assert_ne!(template.id(), ali.id());
//! assert_eq!(template.tests(), ali.tests());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod context;
pub mod demo;
pub mod departments;
pub mod generator;
pub mod registry;
pub mod service;

pub use builder::RecordBuilder;
pub use context::RecordContext;
pub use demo::run_demo;
pub use generator::{RecordIdGenerator, DEFAULT_ID_START};
pub use registry::FactoryRegistry;
pub use service::RecordService;
