//! Domain identifier types with validation
//!
//! Newtype wrappers for record identifiers and department keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::RecordError;

/// Record identifier newtype wrapper
///
/// Issued by [`crate::core::RecordIdGenerator`]; ids are unique for the
/// lifetime of a generator and strictly increasing.
///
/// # Examples
///
/// ```
/// use medrec::domain::ids::RecordId;
///
/// let id = RecordId::new(1000);
/// assert_eq!(id.to_string(), "1000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a RecordId from a raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Department key newtype wrapper
///
/// Keys are trimmed and lower-cased on construction, so `"Cardiology"` and
/// `"cardiology"` produce equal keys.
///
/// # Examples
///
/// ```
/// use medrec::domain::ids::DepartmentKey;
///
/// let key = DepartmentKey::new("  Cardiology ").unwrap();
/// assert_eq!(key.as_str(), "cardiology");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentKey(String);

impl DepartmentKey {
    /// Creates a new DepartmentKey
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is empty or only whitespace
    pub fn new(key: impl AsRef<str>) -> Result<Self, RecordError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(RecordError::Validation(
                "Department key cannot be empty".to_string(),
            ));
        }
        Ok(Self(key.to_lowercase()))
    }

    /// Wraps a key that is already trimmed, lower-cased and non-empty
    pub(crate) fn from_normalized(key: &'static str) -> Self {
        Self(key.to_string())
    }

    /// Returns the normalized key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DepartmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DepartmentKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DepartmentKey {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DepartmentKey> for String {
    fn from(key: DepartmentKey) -> Self {
        key.0
    }
}

impl AsRef<str> for DepartmentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
