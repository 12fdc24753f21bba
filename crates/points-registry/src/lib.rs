//! # points-registry: Receipt Store for Receipt Points
//!
//! Holds every scored receipt in memory and hands out ids for them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  HTTP handler (POST /receipts/process)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                points-registry (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────┐    ┌─────────────────┐                   │   │
//! │  │   │ ReceiptRegistry │    │   IdGenerator   │                   │   │
//! │  │   │ (registry.rs)   │◄───│   (id.rs)       │                   │   │
//! │  │   │                 │    │                 │                   │   │
//! │  │   │ RwLock<HashMap> │    │ UuidGenerator   │                   │   │
//! │  │   │ store / lookup  │    │ Sequential...   │                   │   │
//! │  │   └────────┬────────┘    └─────────────────┘                   │   │
//! │  └────────────┼────────────────────────────────────────────────────┘   │
//! │               ▼                                                         │
//! │  points-core::score(&receipt)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use points_core::{LineItem, Receipt};
//! use points_registry::ReceiptRegistry;
//!
//! let registry = ReceiptRegistry::new();
//! let id = registry
//!     .store(Receipt {
//!         retailer: "Target".to_string(),
//!         purchase_date: "2022-01-02".to_string(),
//!         purchase_time: "13:13".to_string(),
//!         items: vec![LineItem::new("Pepsi - 12-oz", "1.25")],
//!         total: "1.25".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(registry.lookup(&id), Some(31));
//! assert_eq!(registry.lookup("missing"), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod registry;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RegistryError, RegistryResult};
pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use registry::ReceiptRegistry;
