//! Antipode Service Library
//!
//! HTTP handlers, router wiring, and shared state for the antipode service.
//! This library is used by both the antipode-service binary and integration
//! tests.

pub mod handlers;

use std::sync::Arc;

use antipode::PlaceLookupClient;
use axum::{routing::get, Router};

/// Application state shared across handlers.
pub struct AppState {
    /// Client for nearby-place lookups against the knowledge source.
    pub lookup: PlaceLookupClient,
}

/// Build the service router.
///
/// Middleware (tracing, CORS) and the OpenAPI UI are layered on by the
/// binary; integration tests drive this router directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/antipode", get(handlers::get_antipode))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{AntipodeQuery, AntipodeResponse, ErrorResponse, HealthResponse, SidePayload};
