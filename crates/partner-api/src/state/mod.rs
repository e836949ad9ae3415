//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, database pool, JWT service, and configuration.

use std::sync::Arc;

use partner_common::{AppConfig, JwtService};
use partner_db::PgPool;
use partner_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing repositories, clock, and ID generator
    service_context: Arc<ServiceContext>,
    /// Database pool, held here for the readiness probe
    pool: PgPool,
    /// JWT service for validating access tokens
    jwt_service: Arc<JwtService>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            pool,
            jwt_service,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
