//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub partnership: PartnershipConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration for role-bearing access tokens
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Partnership lifecycle defaults
#[derive(Debug, Clone, Deserialize)]
pub struct PartnershipConfig {
    /// Approval validity window used when the reviewer picks no duration
    #[serde(default = "default_duration_days")]
    pub default_duration_days: i64,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "partner-hub".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_duration_days() -> i64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: env::var("JWT_ACCESS_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            partnership: PartnershipConfig {
                default_duration_days: env::var("PARTNERSHIP_DEFAULT_DURATION_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_duration_days),
            },
            snowflake: SnowflakeConfig {
                worker_id: env::var("SNOWFLAKE_WORKER_ID")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidVar(&'static str),
}
