//! # Validation Module
//!
//! Structural checks on an incoming receipt, run before scoring.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Missing fields, wrong JSON types                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Retailer present                                                  │
//! │  └── Item count within bounds                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (rules + field parsers)                              │
//! │  └── Money/date/time formats → MalformedField                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::validation::validate_retailer;
//!
//! assert!(validate_retailer("Target").is_ok());
//! assert!(validate_retailer("   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Receipt;
use crate::MAX_RECEIPT_ITEMS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "retailer".to_string(),
        });
    }

    Ok(())
}

/// Validates the number of line items.
///
/// ## Rules
/// - At least one item
/// - Must not exceed MAX_RECEIPT_ITEMS (1000)
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count == 0 || count > MAX_RECEIPT_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_RECEIPT_ITEMS as i64,
        });
    }

    Ok(())
}

/// Runs every structural check on a receipt.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    validate_retailer(&receipt.retailer)?;
    validate_item_count(receipt.items.len())?;
    Ok(())
}
