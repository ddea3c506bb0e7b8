//! HTTP API Layer
//!
//! This crate exposes the claim assessment pipeline over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Validation, scoring, routing, summary, and health endpoints
//! - **Middleware**: Request tracing and logging
//! - **DTOs**: Lenient request payloads
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimAssessmentService;

use crate::config::ApiConfig;
use crate::handlers::{assessment, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimAssessmentService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Assessment pipeline over the claim store
/// * `config` - API configuration
pub fn create_router(service: Arc<ClaimAssessmentService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/validate", post(assessment::validate_claim))
        .route("/score", post(assessment::score_claim))
        .route("/:id/summary", get(assessment::summarize_claim))
        .route("/:id/route", get(assessment::route_claim));

    Router::new()
        .merge(public_routes)
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
