//! # partner-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PartnershipConfig, RateLimitConfig, ServerConfig, SnowflakeConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
