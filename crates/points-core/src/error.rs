//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── CoreError        - Scoring failures (MalformedField)              │
//! │  └── ValidationError  - Structurally invalid receipts                  │
//! │                                                                         │
//! │  points-registry errors (separate crate)                               │
//! │  └── RegistryError    - Store/lookup failures                          │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RegistryError → ApiError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Scoring errors.
///
/// A receipt that fails to score is rejected as a whole: the engine stops at
/// the first failure and nothing is stored.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A money, date or time field could not be parsed.
    ///
    /// ## When This Occurs
    /// - `total` or an item `price` is not a decimal number
    /// - `purchaseDate` is not `YYYY-MM-DD` or does not end in a digit
    /// - `purchaseTime` is not `HH:MM`
    #[error("Malformed {field} '{value}': {reason}")]
    MalformedField {
        field: String,
        value: String,
        reason: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a MalformedField error.
    pub fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CoreError::MalformedField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a receipt payload is structurally unusable.
/// Checked before any scoring runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
