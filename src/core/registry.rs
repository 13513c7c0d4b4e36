//! Department factory registry
//!
//! Maps department keys to their descriptors. Keys are compared
//! case-insensitively through [`DepartmentKey`] normalization.

use crate::domain::ids::DepartmentKey;
use crate::domain::{DepartmentDescriptor, RecordError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::departments::built_in_departments;

/// Registry of department descriptors
///
/// Registration and lookup both take `&self`; the map sits behind a
/// read-write lock so a shared registry may be extended while other callers
/// are looking departments up.
#[derive(Debug, Default)]
pub struct FactoryRegistry {
    departments: RwLock<HashMap<DepartmentKey, Arc<DepartmentDescriptor>>>,
}

impl FactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the built-in departments
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for descriptor in built_in_departments() {
            registry.register(descriptor);
        }
        registry
    }

    /// Register a department, replacing any descriptor with the same key
    ///
    /// Returns the descriptor previously registered under the key, if any.
    pub fn register(
        &self,
        descriptor: Arc<DepartmentDescriptor>,
    ) -> Option<Arc<DepartmentDescriptor>> {
        let key = descriptor.key().clone();
        let previous = self.write().insert(key.clone(), descriptor);
        if previous.is_some() {
            tracing::debug!(department = %key, "Replaced department registration");
        } else {
            tracing::debug!(department = %key, "Registered department");
        }
        previous
    }

    /// Look up a department by key
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownDepartment`] carrying the caller's input
    /// when the key is blank or not registered.
    pub fn lookup(&self, key: &str) -> Result<Arc<DepartmentDescriptor>> {
        let normalized = DepartmentKey::new(key)
            .map_err(|_| RecordError::UnknownDepartment(key.to_string()))?;
        self.read()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| RecordError::UnknownDepartment(key.to_string()))
    }

    /// Whether a department is registered under the key
    pub fn has(&self, key: &str) -> bool {
        match DepartmentKey::new(key) {
            Ok(normalized) => self.read().contains_key(&normalized),
            Err(_) => false,
        }
    }

    /// Registered descriptors sorted by key
    pub fn departments(&self) -> Vec<Arc<DepartmentDescriptor>> {
        let mut departments: Vec<_> = self.read().values().cloned().collect();
        departments.sort_by(|a, b| a.key().cmp(b.key()));
        departments
    }

    /// Number of registered departments
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no department is registered
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoned locks are recovered: entries are immutable descriptors.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<DepartmentKey, Arc<DepartmentDescriptor>>> {
        self.departments
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<DepartmentKey, Arc<DepartmentDescriptor>>> {
        self.departments
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CannedReport;
    use std::thread;
    use test_case::test_case;

    fn pediatrics() -> Arc<DepartmentDescriptor> {
        Arc::new(
            DepartmentDescriptor::new(
                "Pediatrics",
                "Pediatrics",
                ["Growth Assessment"],
                CannedReport::default(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_with_defaults_registers_four() {
        let registry = FactoryRegistry::with_defaults();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test_case("cardiology" ; "lower case")]
    #[test_case("Cardiology" ; "title case")]
    #[test_case("CARDIOLOGY" ; "upper case")]
    #[test_case("  cardiology " ; "padded")]
    fn test_lookup_is_case_insensitive(key: &str) {
        let registry = FactoryRegistry::with_defaults();
        let descriptor = registry.lookup(key).unwrap();
        assert_eq!(descriptor.display_name(), "Cardiology");
        assert!(registry.has(key));
    }

    #[test]
    fn test_lookup_variants_return_same_descriptor() {
        let registry = FactoryRegistry::with_defaults();
        let a = registry.lookup("Cardiology").unwrap();
        let b = registry.lookup("cardiology").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = FactoryRegistry::with_defaults();
        let err = registry.lookup("Unknown").unwrap_err();
        assert!(matches!(err, RecordError::UnknownDepartment(ref k) if k == "Unknown"));
        assert!(!registry.has("unknown"));
    }

    #[test]
    fn test_lookup_blank_is_unknown() {
        let registry = FactoryRegistry::with_defaults();
        assert!(matches!(
            registry.lookup("   "),
            Err(RecordError::UnknownDepartment(_))
        ));
        assert!(!registry.has(""));
    }

    #[test]
    fn test_register_and_overwrite() {
        let registry = FactoryRegistry::new();
        assert!(registry.register(pediatrics()).is_none());
        assert!(registry.has("PEDIATRICS"));
        assert!(registry.register(pediatrics()).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_departments_sorted() {
        let registry = FactoryRegistry::with_defaults();
        registry.register(pediatrics());
        let keys: Vec<String> = registry
            .departments()
            .iter()
            .map(|d| d.key().to_string())
            .collect();
        assert_eq!(
            keys,
            ["cardiology", "dermatology", "neurology", "orthopedics", "pediatrics"]
        );
    }

    #[test]
    fn test_concurrent_register_and_lookup() {
        let registry = Arc::new(FactoryRegistry::with_defaults());
        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..100 {
                    registry.register(pediatrics());
                }
            })
        };
        let reader = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(registry.lookup("neurology").is_ok());
                }
            })
        };
        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(registry.len(), 5);
    }
}
