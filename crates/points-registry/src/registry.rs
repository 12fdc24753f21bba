//! # Receipt Registry
//!
//! In-memory map from receipt id to scored receipt.
//!
//! ## Store Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       store(receipt)                                    │
//! │                                                                         │
//! │  0. VALIDATE   validate_receipt(&receipt)    ── Err → nothing stored    │
//! │  1. SCORE      points_core::score(&receipt)  ── Err → nothing stored    │
//! │  2. IDENTIFY   ids.new_id()                                             │
//! │  3. BUILD      Arc<ScoredReceipt { id, points, receipt }>               │
//! │  4. INSERT     write lock held only for HashMap::insert                 │
//! │                                                                         │
//! │  A reader sees the entry fully built or not at all.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The map sits behind a `RwLock`: lookups share the read lock, stores take
//! the write lock for a single insert. Wrap the registry in `Arc` to share it
//! between request handlers.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use points_core::{score, validate_receipt, CoreError, Points, Receipt, ScoredReceipt};
use tracing::debug;

use crate::error::RegistryResult;
use crate::id::{IdGenerator, UuidGenerator};

/// Concurrent store of scored receipts.
pub struct ReceiptRegistry {
    receipts: RwLock<HashMap<String, Arc<ScoredReceipt>>>,
    ids: Box<dyn IdGenerator>,
}

impl ReceiptRegistry {
    /// Creates an empty registry that issues UUID v4 ids.
    pub fn new() -> Self {
        ReceiptRegistry::with_generator(UuidGenerator)
    }

    /// Creates an empty registry with a custom id source.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        ReceiptRegistry {
            receipts: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
        }
    }

    /// Validates and scores a receipt, stores it, and returns its new id.
    ///
    /// ## Errors
    /// `RegistryError::Rejected` when the receipt is structurally invalid or
    /// has a malformed field. The registry is left untouched in that case.
    pub fn store(&self, receipt: Receipt) -> RegistryResult<String> {
        validate_receipt(&receipt).map_err(CoreError::from)?;
        let points = score(&receipt)?;
        let id = self.ids.new_id();

        debug!(id = %id, points, retailer = %receipt.retailer, "Storing scored receipt");

        let scored = Arc::new(ScoredReceipt {
            id: id.clone(),
            points,
            receipt,
        });

        // Writers only ever run a single insert, so a poisoned map is still
        // consistent and safe to keep using.
        self.receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), scored);

        Ok(id)
    }

    /// Returns the points stored for `id`, or `None` if the id is unknown.
    pub fn lookup(&self, id: &str) -> Option<Points> {
        self.get(id).map(|scored| scored.points)
    }

    /// Returns the full scored receipt for `id`.
    pub fn get(&self, id: &str) -> Option<Arc<ScoredReceipt>> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReceiptRegistry {
    fn default() -> Self {
        ReceiptRegistry::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
