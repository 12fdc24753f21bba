//! # points-api: Receipt Points Service
//!
//! HTTP front end and debug file mode for the receipt points engine.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Points API                                       │
//! │                                                                         │
//! │  Client ───► axum Router ───► routes.rs ───► ReceiptRegistry           │
//! │                                   │                  │                  │
//! │                                   ▼                  ▼                  │
//! │                              error.rs          points-core::score       │
//! │                              (ApiError)                                 │
//! │                                                                         │
//! │  points-api <file> ───► debug_file.rs ───► response.json               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod debug_file;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use points_registry::ReceiptRegistry;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
///
/// Cloned into every handler; the registry itself is shared through `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ReceiptRegistry>,
}

impl AppState {
    /// Wraps an explicitly constructed registry.
    pub fn new(registry: ReceiptRegistry) -> Self {
        AppState {
            registry: Arc::new(registry),
        }
    }
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
