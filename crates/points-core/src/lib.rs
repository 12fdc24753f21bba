//! # points-core: Pure Scoring Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns a purchase receipt
//! into a reward-points score using a fixed table of bonus rules, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 points-api (HTTP + debug mode)                  │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              points-registry (in-memory store)                  │   │
//! │  │         store(receipt) → id        lookup(id) → points          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  fields  │  │  rules   │  │  engine  │  │  validation  │   │   │
//! │  │   │  money   │  │ 7 bonus  │  │  score   │  │  response    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, LineItem, ScoredReceipt)
//! - [`money`] - Amount parsing and divisibility checks
//! - [`fields`] - Date and time parsing
//! - [`rules`] - The seven bonus rules
//! - [`engine`] - Score summation and per-rule breakdown
//! - [`validation`] - Structural receipt checks
//! - [`response`] - Output shapes
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score, LineItem, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![LineItem::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(score(&receipt).unwrap(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod fields;
pub mod money;
pub mod response;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{breakdown, score, RuleContribution, ScoreBreakdown};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use response::{PointsResponse, ProcessResponse, ScoreResponse};
pub use rules::BonusRule;
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items accepted on a single receipt.
pub const MAX_RECEIPT_ITEMS: usize = 1000;
