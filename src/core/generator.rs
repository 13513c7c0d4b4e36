//! Record id generator
//!
//! One generator is created per running system and shared by every builder
//! and service call through [`crate::core::RecordContext`].

use crate::domain::ids::RecordId;
use crate::domain::{RecordError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// First id issued by a default generator
pub const DEFAULT_ID_START: u64 = 1000;

/// Monotonic record id counter
///
/// Ids are handed out with a single atomic checked increment, so concurrent
/// callers always receive distinct, strictly increasing values. `u64::MAX` is
/// never issued; once the counter reaches it every call fails with
/// [`RecordError::IdsExhausted`].
#[derive(Debug)]
pub struct RecordIdGenerator {
    next: AtomicU64,
}

impl RecordIdGenerator {
    /// Create a generator whose first issued id is `start`
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Issue the next id
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IdsExhausted`] instead of wrapping around
    pub fn next_id(&self) -> Result<RecordId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(RecordId::new)
            .map_err(RecordError::IdsExhausted)
    }

    /// Id the next call to [`RecordIdGenerator::next_id`] will return
    pub fn peek(&self) -> RecordId {
        RecordId::new(self.next.load(Ordering::SeqCst))
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_START)
    }
}
