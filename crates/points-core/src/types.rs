//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │    LineItem     │   │  ScoredReceipt  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │──►│  short_desc     │   │  id (opaque)    │       │
//! │  │  purchase_date  │   │  price (text)   │   │  points         │       │
//! │  │  purchase_time  │   └─────────────────┘   │  receipt ───────┼──►    │
//! │  │  items          │                         └─────────────────┘       │
//! │  │  total (text)   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Fields
//! Money, date and time stay as the raw strings the client sent. They are
//! parsed when a rule needs them, so a stored receipt always round-trips to
//! exactly what was submitted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point total. Every rule contributes a non-negative amount.
pub type Points = u64;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt as submitted by a client.
///
/// Field names follow the camelCase wire format; the PascalCase spellings
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(alias = "Retailer")]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    #[serde(alias = "PurchaseDate")]
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    #[serde(alias = "PurchaseTime")]
    pub purchase_time: String,

    /// Line items, in the order they were printed.
    #[serde(alias = "Items")]
    pub items: Vec<LineItem>,

    /// Total amount paid, e.g. `"35.35"`.
    #[serde(alias = "Total")]
    pub total: String,
}

// =============================================================================
// Line Item
// =============================================================================

/// A line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Short product description. May carry leading/trailing whitespace.
    #[serde(alias = "ShortDescription")]
    pub short_description: String,

    /// Item price, e.g. `"6.49"`.
    #[serde(alias = "Price")]
    pub price: String,
}

impl LineItem {
    /// Convenience constructor.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        LineItem {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Description with surrounding whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A receipt together with its identifier and computed score.
///
/// Built once when a receipt is stored and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReceipt {
    /// Opaque unique identifier.
    pub id: String,

    /// Points awarded.
    #[ts(type = "number")]
    pub points: Points,

    /// The receipt exactly as submitted.
    pub receipt: Receipt,
}
