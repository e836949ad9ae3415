//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use partner_common::{AppConfig, AppError, JwtService};
use partner_core::{SnowflakeGenerator, SystemClock};
use partner_db::{create_pool, PgPartnershipListingRepository, PgPartnershipRequestRepository};
use partner_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the basic middleware stack so they stay reachable
/// when the rate limiter is saturated.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api_router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health_router = apply_middleware(health_routes());

    api_router.merge(health_router).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = partner_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let request_repo = Arc::new(PgPartnershipRequestRepository::new(pool.clone()));
    let listing_repo = Arc::new(PgPartnershipListingRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .request_repo(request_repo)
        .listing_repo(listing_repo)
        .clock(Arc::new(SystemClock))
        .snowflake_generator(snowflake_generator)
        .default_duration_days(config.partnership.default_duration_days)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, jwt_service, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
