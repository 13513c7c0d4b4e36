//! Record context
//!
//! Owns the one id generator and the one department registry of a running
//! system. The entry point builds it and hands an `Arc` to every service.

use super::generator::{RecordIdGenerator, DEFAULT_ID_START};
use super::registry::FactoryRegistry;
use crate::config::schema::MedrecConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Shared state for record construction
#[derive(Debug)]
pub struct RecordContext {
    ids: RecordIdGenerator,
    registry: FactoryRegistry,
}

impl RecordContext {
    /// Create a context from explicit parts
    pub fn new(ids: RecordIdGenerator, registry: FactoryRegistry) -> Self {
        Self { ids, registry }
    }

    /// Create a context from configuration
    ///
    /// Registers the built-in departments, then every configured department
    /// (configured entries replace built-ins with the same key).
    ///
    /// # Errors
    ///
    /// Returns a validation error if a configured department is invalid
    pub fn from_config(config: &MedrecConfig) -> Result<Arc<Self>> {
        let registry = FactoryRegistry::with_defaults();
        for department in &config.departments {
            registry.register(Arc::new(department.to_descriptor()?));
        }

        tracing::info!(
            id_start = config.records.id_start,
            departments = registry.len(),
            "Record context initialized"
        );

        Ok(Arc::new(Self::new(
            RecordIdGenerator::new(config.records.id_start),
            registry,
        )))
    }

    /// Id generator
    pub fn ids(&self) -> &RecordIdGenerator {
        &self.ids
    }

    /// Department registry
    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }
}

impl Default for RecordContext {
    fn default() -> Self {
        Self::new(
            RecordIdGenerator::new(DEFAULT_ID_START),
            FactoryRegistry::with_defaults(),
        )
    }
}
