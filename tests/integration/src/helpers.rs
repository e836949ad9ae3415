//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, signing access tokens,
//! and making HTTP requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use anyhow::Result;
use partner_api::{create_app, create_app_state};
use partner_common::{AppConfig, JwtService};
use partner_core::{Role, Snowflake};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test user IDs
static USER_ID_COUNTER: AtomicI64 = AtomicI64::new(500_000);

/// Get a unique user ID for testing
///
/// Every test gets fresh requester IDs so the one-open-request rule
/// never trips across tests sharing a database.
pub fn unique_user_id() -> Snowflake {
    Snowflake::new(USER_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt_service: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));

        // Tests sign their own tokens, acting as the external session provider
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

        // Create app state
        let state = create_app_state(config).await?;

        // Apply schema migrations
        partner_db::run_migrations(state.pool()).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            jwt_service,
            _handle: handle,
        })
    }

    /// Sign an access token for the given user and role
    pub fn issue_token(&self, user_id: Snowflake, role: Role) -> Result<String> {
        Ok(self.jwt_service.issue_token(user_id, role)?)
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
