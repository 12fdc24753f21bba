//! # Registry Error Types
//!
//! Error types for registry operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (points-core)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RegistryError (this module) ← Adds store-level failures               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in points-api) ← Serialized for HTTP clients                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unknown id is not an error: lookups return `Option`.

use points_core::CoreError;
use thiserror::Error;

/// Registry operation errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The receipt could not be scored, so nothing was stored.
    ///
    /// ## When This Occurs
    /// - Blank retailer or an item count out of range
    /// - Malformed total, price, date or time
    #[error("Receipt rejected: {0}")]
    Rejected(#[from] CoreError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
