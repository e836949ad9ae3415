//! PostgreSQL implementation of PartnershipRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use partner_core::entities::{ListingSync, PartnershipRequest, RequestStatus};
use partner_core::error::DomainError;
use partner_core::traits::{PartnershipRequestRepository, RepoResult};
use partner_core::value_objects::Snowflake;

use crate::models::RequestModel;

use super::error::{listing_not_found, map_db_error, map_unique_violation, request_not_found};

const REQUEST_COLUMNS: &str = "id, requester_id, status, is_renewal, is_active, created_at, \
     renewed_at, expiration_date, name, description, website, logo_url, \
     reason, requirements, other_partners_info, discord_invite, member_count";

/// PostgreSQL implementation of PartnershipRequestRepository
#[derive(Clone)]
pub struct PgPartnershipRequestRepository {
    pool: PgPool,
}

impl PgPartnershipRequestRepository {
    /// Create a new PgPartnershipRequestRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn apply_listing_sync(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        sync: &ListingSync,
    ) -> RepoResult<()> {
        match sync {
            ListingSync::Create(listing) => {
                sqlx::query(
                    r#"
                    INSERT INTO partnership_listings
                        (id, request_id, is_active, name, description, website,
                         member_count, logo_url)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(listing.id.into_inner())
                .bind(listing.request_id.into_inner())
                .bind(listing.is_active)
                .bind(&listing.name)
                .bind(&listing.description)
                .bind(&listing.website)
                .bind(listing.member_count)
                .bind(&listing.logo_url)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    map_unique_violation(e, || {
                        DomainError::InternalError(format!(
                            "listing already exists for request {}",
                            listing.request_id
                        ))
                    })
                })?;
            }
            ListingSync::Refresh(listing) => {
                let result = sqlx::query(
                    r#"
                    UPDATE partnership_listings
                    SET is_active = $1, name = $2, description = $3, website = $4,
                        member_count = $5, logo_url = $6
                    WHERE request_id = $7
                    "#,
                )
                .bind(listing.is_active)
                .bind(&listing.name)
                .bind(&listing.description)
                .bind(&listing.website)
                .bind(listing.member_count)
                .bind(&listing.logo_url)
                .bind(listing.request_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?;

                if result.rows_affected() == 0 {
                    return Err(listing_not_found(listing.request_id));
                }
            }
            ListingSync::Deactivate(request_id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE partnership_listings
                    SET is_active = FALSE
                    WHERE request_id = $1
                    "#,
                )
                .bind(request_id.into_inner())
                .execute(&mut **tx)
                .await
                .map_err(map_db_error)?;

                if result.rows_affected() == 0 {
                    return Err(listing_not_found(*request_id));
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl PartnershipRequestRepository for PgPartnershipRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PartnershipRequest>> {
        let result = sqlx::query_as::<_, RequestModel>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM partnership_requests WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PartnershipRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_requester(
        &self,
        requester_id: Snowflake,
    ) -> RepoResult<Vec<PartnershipRequest>> {
        let results = sqlx::query_as::<_, RequestModel>(&format!(
            r#"
            SELECT {REQUEST_COLUMNS}
            FROM partnership_requests
            WHERE requester_id = $1
            ORDER BY COALESCE(renewed_at, created_at) DESC
            "#
        ))
        .bind(requester_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(PartnershipRequest::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn has_open_request(&self, requester_id: Snowflake) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM partnership_requests
                WHERE requester_id = $1 AND status <> 'rejected'
            )
            "#,
        )
        .bind(requester_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<PartnershipRequest>> {
        let results = sqlx::query_as::<_, RequestModel>(&format!(
            r#"
            SELECT {REQUEST_COLUMNS}
            FROM partnership_requests
            ORDER BY COALESCE(renewed_at, created_at) DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(PartnershipRequest::try_from)
            .collect()
    }

    #[instrument(skip(self, request), fields(request_id = %request.id))]
    async fn create(&self, request: &PartnershipRequest) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO partnership_requests
                (id, requester_id, status, is_renewal, is_active, created_at,
                 renewed_at, expiration_date, name, description, website, logo_url,
                 reason, requirements, other_partners_info, discord_invite, member_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(request.id.into_inner())
        .bind(request.requester_id.into_inner())
        .bind(request.status.as_str())
        .bind(request.is_renewal)
        .bind(request.is_active)
        .bind(request.created_at)
        .bind(request.renewed_at)
        .bind(request.expiration_date)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.website)
        .bind(&request.logo_url)
        .bind(&request.reason)
        .bind(&request.requirements)
        .bind(&request.other_partners_info)
        .bind(&request.discord_invite)
        .bind(request.member_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateOpenRequest(request.requester_id)
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, request, listing), fields(request_id = %request.id))]
    async fn apply_transition(
        &self,
        request: &PartnershipRequest,
        expected: RequestStatus,
        listing: Option<&ListingSync>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Conditional on the stored status still matching what the caller
        // read; a concurrent transition makes this a no-op and we bail out.
        let result = sqlx::query(
            r#"
            UPDATE partnership_requests
            SET status = $1, is_renewal = $2, is_active = $3, renewed_at = $4,
                expiration_date = $5, reason = $6
            WHERE id = $7 AND status = $8
            "#,
        )
        .bind(request.status.as_str())
        .bind(request.is_renewal)
        .bind(request.is_active)
        .bind(request.renewed_at)
        .bind(request.expiration_date)
        .bind(&request.reason)
        .bind(request.id.into_inner())
        .bind(expected.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM partnership_requests WHERE id = $1)",
            )
            .bind(request.id.into_inner())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::TransitionConflict(request.id)
            } else {
                request_not_found(request.id)
            });
        }

        if let Some(sync) = listing {
            Self::apply_listing_sync(&mut tx, sync).await?;
        }

        tx.commit().await.map_err(map_db_error)
    }
}
