//! # Identifier Generation
//!
//! Receipt ids are opaque strings. The registry only needs them to be
//! unique; the format is up to the generator.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier never returned before by this generator.
    fn new_id(&self) -> String;
}

/// UUID v4 identifiers, e.g. `7fb1377b-b223-49d9-a31a-5a02701dd310`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable identifiers (`{prefix}-1`, `{prefix}-2`, ...).
///
/// Useful for tests and debugging where ids must be known in advance.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    /// Creates a generator whose first id is `{prefix}-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialGenerator {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
