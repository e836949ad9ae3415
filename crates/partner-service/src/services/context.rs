//! Service context - dependency container for services
//!
//! Holds the repositories, clock, and ID generator needed by services. Built
//! against the repository traits so tests can run on in-memory stores.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use partner_core::traits::{PartnershipListingRepository, PartnershipRequestRepository};
use partner_core::{Clock, Snowflake, SnowflakeGenerator};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for requests and listings
/// - The clock used to evaluate expirations
/// - Snowflake generator for ID generation
/// - Partnership policy defaults
#[derive(Clone)]
pub struct ServiceContext {
    request_repo: Arc<dyn PartnershipRequestRepository>,
    listing_repo: Arc<dyn PartnershipListingRepository>,
    clock: Arc<dyn Clock>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    default_duration: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        request_repo: Arc<dyn PartnershipRequestRepository>,
        listing_repo: Arc<dyn PartnershipListingRepository>,
        clock: Arc<dyn Clock>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        default_duration_days: i64,
    ) -> Self {
        Self {
            request_repo,
            listing_repo,
            clock,
            snowflake_generator,
            default_duration: Duration::days(default_duration_days),
        }
    }

    // === Repositories ===

    /// Get the partnership request repository
    pub fn request_repo(&self) -> &dyn PartnershipRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the partnership listing repository
    pub fn listing_repo(&self) -> &dyn PartnershipListingRepository {
        self.listing_repo.as_ref()
    }

    // === Clock ===

    /// Current time according to the injected clock
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // === Policy ===

    /// Approval validity window used when the reviewer picks no duration
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    // === Services ===

    /// Get the snowflake ID generator
    #[must_use]
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    #[must_use]
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("default_duration", &self.default_duration)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    request_repo: Option<Arc<dyn PartnershipRequestRepository>>,
    listing_repo: Option<Arc<dyn PartnershipListingRepository>>,
    clock: Option<Arc<dyn Clock>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    default_duration_days: i64,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_repo: None,
            listing_repo: None,
            clock: None,
            snowflake_generator: None,
            default_duration_days: 30,
        }
    }

    #[must_use]
    pub fn request_repo(mut self, repo: Arc<dyn PartnershipRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn listing_repo(mut self, repo: Arc<dyn PartnershipListingRepository>) -> Self {
        self.listing_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    #[must_use]
    pub fn default_duration_days(mut self, days: i64) -> Self {
        self.default_duration_days = days;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.request_repo
                .ok_or_else(|| super::error::ServiceError::validation("request_repo is required"))?,
            self.listing_repo
                .ok_or_else(|| super::error::ServiceError::validation("listing_repo is required"))?,
            self.clock
                .ok_or_else(|| super::error::ServiceError::validation("clock is required"))?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
            self.default_duration_days,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
