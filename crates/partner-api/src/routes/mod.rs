//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, listings, partnerships};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(partnership_routes())
        .merge(listing_routes())
}

/// Partnership request lifecycle routes
fn partnership_routes() -> Router<AppState> {
    Router::new()
        // Submission and own requests
        .route("/partnerships", post(partnerships::submit_request))
        .route("/partnerships/@me", get(partnerships::get_my_requests))
        // Review queue (reviewers only)
        .route("/partnerships", get(partnerships::get_review_queue))
        .route("/partnerships/:request_id", get(partnerships::get_request))
        // Review decisions
        .route(
            "/partnerships/:request_id/approve",
            post(partnerships::approve_request),
        )
        .route(
            "/partnerships/:request_id/reject",
            post(partnerships::reject_request),
        )
        // Requester lifecycle actions
        .route(
            "/partnerships/:request_id/renewal",
            post(partnerships::request_renewal),
        )
        .route(
            "/partnerships/:request_id/end",
            post(partnerships::end_partnership),
        )
}

/// Partner listing routes
fn listing_routes() -> Router<AppState> {
    Router::new()
        // Public partner page
        .route("/partners", get(listings::get_active_listings))
        // Moderation view of every listing
        .route("/partners/all", get(listings::get_all_listings))
}
