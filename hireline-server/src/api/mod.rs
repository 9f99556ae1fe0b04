//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod member;
pub mod pipeline;
pub mod step;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pipeline endpoints
        .route("/pipeline/create", post(pipeline::create_pipeline))
        .route("/pipeline/list", get(pipeline::list_pipelines))
        .route("/pipeline/{id}", get(pipeline::get_pipeline))
        .route("/pipeline/{id}", delete(pipeline::delete_pipeline))
        // Step endpoints
        .route("/step/create", post(step::create_step))
        .route("/step/{id}", patch(step::update_step))
        .route("/step/{id}", delete(step::delete_step))
        // Member endpoints
        .route("/member/create", post(member::create_member))
        .route("/member/list", get(member::list_members))
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
