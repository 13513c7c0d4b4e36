//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod demo;
pub mod departments;
pub mod generate;
pub mod init;
pub mod validate;
