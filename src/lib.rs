// medrec - Department Patient Record Generator
// Copyright (c) 2025 Medrec Contributors
// Licensed under the MIT License

//! # medrec - Department Patient Record Generator
//!
//! medrec creates patient records for medical departments and renders them as
//! summary or detailed reports.
//!
//! ## Overview
//!
//! - **Departments** are data: a [`domain::DepartmentDescriptor`] holds the
//!   default tests and detail report of one department
//! - **Registry** maps case-insensitive department keys to descriptors and
//!   accepts new departments at runtime
//! - **Builder** assembles a record from a name, a department and a report mode
//! - **Templates** are cloned into new records that keep the template's tests
//!   and receive a fresh id
//! - **One counter** issues strictly increasing ids for the whole process
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Id generator, registry, builder, service, demo driver
//! - [`domain`] - Identifiers, records, department descriptors, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use medrec::core::{RecordContext, RecordService};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RecordService::new(Arc::new(RecordContext::default()));
//!
//! let record = service.generate("cardiology", "Fatima", true)?;
//! println!("{record}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`]. An unknown department is
//! reported and skipped; a builder missing its name or department fails with
//! [`domain::RecordError::InvalidState`]:
//!
//! ```rust
//! use medrec::core::{RecordBuilder, RecordIdGenerator};
//! use medrec::domain::RecordError;
//!
//! let ids = RecordIdGenerator::default();
//! let err = RecordBuilder::new().name("Rahim").build(&ids).unwrap_err();
//! assert!(matches!(err, RecordError::InvalidState(_)));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
