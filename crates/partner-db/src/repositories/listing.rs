//! PostgreSQL implementation of PartnershipListingRepository
//!
//! Read side only. Listing writes ride along with request transitions in
//! `PgPartnershipRequestRepository::apply_transition`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use partner_core::entities::PartnershipListing;
use partner_core::traits::{PartnershipListingRepository, RepoResult};
use partner_core::value_objects::Snowflake;

use crate::models::ListingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PartnershipListingRepository
#[derive(Clone)]
pub struct PgPartnershipListingRepository {
    pool: PgPool,
}

impl PgPartnershipListingRepository {
    /// Create a new PgPartnershipListingRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnershipListingRepository for PgPartnershipListingRepository {
    #[instrument(skip(self))]
    async fn find_by_request(
        &self,
        request_id: Snowflake,
    ) -> RepoResult<Option<PartnershipListing>> {
        let result = sqlx::query_as::<_, ListingModel>(
            r#"
            SELECT id, request_id, is_active, name, description, website,
                   member_count, logo_url
            FROM partnership_listings
            WHERE request_id = $1
            "#,
        )
        .bind(request_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PartnershipListing::from))
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<PartnershipListing>> {
        let results = sqlx::query_as::<_, ListingModel>(
            r#"
            SELECT id, request_id, is_active, name, description, website,
                   member_count, logo_url
            FROM partnership_listings
            WHERE is_active
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PartnershipListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<PartnershipListing>> {
        let results = sqlx::query_as::<_, ListingModel>(
            r#"
            SELECT id, request_id, is_active, name, description, website,
                   member_count, logo_url
            FROM partnership_listings
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PartnershipListing::from).collect())
    }
}
