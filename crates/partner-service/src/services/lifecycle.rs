//! Partnership lifecycle service
//!
//! Coordinates the request state machine: submission, review decisions,
//! renewal, and ending a partnership, plus the read surfaces built on top.
//! Every state change goes through the entity's transition methods and is
//! persisted with the status the caller read, so concurrent reviews cannot
//! silently overwrite each other.

use chrono::Duration;
use partner_core::entities::{
    ListingSync, PartnershipListing, PartnershipRequest, RequestBuckets,
};
use partner_core::{Actor, DomainError, Snowflake, Submission};
use tracing::{info, instrument};

use crate::dto::{
    ApprovePartnershipRequest, PartnershipListingResponse, PartnershipRequestResponse,
    RenewPartnershipRequest, ReviewQueueResponse, SubmitPartnershipRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Partnership lifecycle service
pub struct PartnershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PartnershipService<'a> {
    /// Create a new PartnershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Write operations
    // ========================================================================

    /// Submit a new partnership application
    #[instrument(skip(self, request), fields(requester_id = %actor.user_id))]
    pub async fn submit(
        &self,
        actor: Actor,
        request: SubmitPartnershipRequest,
    ) -> ServiceResult<PartnershipRequestResponse> {
        if self
            .ctx
            .request_repo()
            .has_open_request(actor.user_id)
            .await?
        {
            return Err(DomainError::DuplicateOpenRequest(actor.user_id).into());
        }

        let now = self.ctx.now();
        let entity = PartnershipRequest::new(
            self.ctx.generate_id(),
            actor.user_id,
            Submission {
                name: request.name,
                description: request.description,
                website: request.website,
                logo_url: request.logo_url,
                reason: request.reason,
                requirements: request.requirements,
                other_partners_info: request.other_partners_info,
                discord_invite: request.discord_invite,
                member_count: request.member_count,
            },
            now,
        )?;

        // The partial unique index backs this up if a concurrent submission
        // slipped past the check above.
        self.ctx.request_repo().create(&entity).await?;

        info!(
            request_id = %entity.id,
            requester_id = %entity.requester_id,
            name = %entity.name,
            "Partnership request submitted"
        );

        Ok(PartnershipRequestResponse::from_entity(&entity, now))
    }

    /// Approve a pending request, first-time or renewal
    ///
    /// The first approval creates the public listing; later approvals refresh
    /// its display fields and reactivate it. Request and listing writes commit
    /// together.
    #[instrument(skip(self, request), fields(reviewer_id = %actor.user_id))]
    pub async fn approve(
        &self,
        actor: Actor,
        id: Snowflake,
        request: ApprovePartnershipRequest,
    ) -> ServiceResult<PartnershipRequestResponse> {
        self.require_reviewer(&actor)?;

        let duration_days = request
            .duration_days
            .map_or(Ok(self.ctx.default_duration()), |days| {
                if (1..=365).contains(&days) {
                    Ok(Duration::days(days))
                } else {
                    Err(DomainError::InvalidDuration { days })
                }
            })?;

        let mut entity = self.load_request(id).await?;
        let expected = entity.status;
        let now = self.ctx.now();
        let was_renewal = entity.approve(now, duration_days)?;

        let sync = match self.ctx.listing_repo().find_by_request(id).await? {
            Some(mut listing) => {
                listing.refresh_from(&entity);
                ListingSync::Refresh(listing)
            }
            None => ListingSync::Create(PartnershipListing::from_request(
                self.ctx.generate_id(),
                &entity,
            )),
        };

        self.ctx
            .request_repo()
            .apply_transition(&entity, expected, Some(&sync))
            .await?;

        info!(
            request_id = %id,
            reviewer_id = %actor.user_id,
            was_renewal,
            expiration = %entity.effective_expiration(),
            "Partnership request approved"
        );

        Ok(PartnershipRequestResponse::from_entity(&entity, now))
    }

    /// Reject a pending request or renewal
    ///
    /// Rejecting a renewal leaves the existing listing alone; the previous
    /// approval stays valid until it expires on its own.
    #[instrument(skip(self), fields(reviewer_id = %actor.user_id))]
    pub async fn reject(
        &self,
        actor: Actor,
        id: Snowflake,
    ) -> ServiceResult<PartnershipRequestResponse> {
        self.require_reviewer(&actor)?;

        let mut entity = self.load_request(id).await?;
        let expected = entity.status;
        entity.reject()?;

        self.ctx
            .request_repo()
            .apply_transition(&entity, expected, None)
            .await?;

        info!(
            request_id = %id,
            reviewer_id = %actor.user_id,
            "Partnership request rejected"
        );

        Ok(PartnershipRequestResponse::from_entity(&entity, self.ctx.now()))
    }

    /// Ask for an approved partnership to be re-validated
    #[instrument(skip(self, request), fields(requester_id = %actor.user_id))]
    pub async fn request_renewal(
        &self,
        actor: Actor,
        id: Snowflake,
        request: RenewPartnershipRequest,
    ) -> ServiceResult<PartnershipRequestResponse> {
        let mut entity = self.load_request(id).await?;
        self.require_owner(&actor, &entity)?;

        let expected = entity.status;
        let now = self.ctx.now();
        entity.request_renewal(request.justification, now)?;

        self.ctx
            .request_repo()
            .apply_transition(&entity, expected, None)
            .await?;

        info!(
            request_id = %id,
            requester_id = %actor.user_id,
            "Partnership renewal requested"
        );

        Ok(PartnershipRequestResponse::from_entity(&entity, now))
    }

    /// End an approved, active partnership
    ///
    /// The request stays approved with its history intact; only the active
    /// flag flips, and the listing is deactivated in the same write.
    #[instrument(skip(self), fields(requester_id = %actor.user_id))]
    pub async fn end_partnership(
        &self,
        actor: Actor,
        id: Snowflake,
    ) -> ServiceResult<PartnershipRequestResponse> {
        let mut entity = self.load_request(id).await?;
        self.require_owner(&actor, &entity)?;

        let expected = entity.status;
        entity.end()?;

        self.ctx
            .request_repo()
            .apply_transition(&entity, expected, Some(&ListingSync::Deactivate(id)))
            .await?;

        info!(
            request_id = %id,
            requester_id = %actor.user_id,
            "Partnership ended"
        );

        Ok(PartnershipRequestResponse::from_entity(&entity, self.ctx.now()))
    }

    // ========================================================================
    // Read operations
    // ========================================================================

    /// Get a single request; visible to its owner and to reviewers
    #[instrument(skip(self))]
    pub async fn get_request(
        &self,
        actor: Actor,
        id: Snowflake,
    ) -> ServiceResult<PartnershipRequestResponse> {
        let entity = self.load_request(id).await?;
        if !actor.is_reviewer() {
            self.require_owner(&actor, &entity)?;
        }

        Ok(PartnershipRequestResponse::from_entity(&entity, self.ctx.now()))
    }

    /// List the caller's own requests, newest submission first
    #[instrument(skip(self), fields(requester_id = %actor.user_id))]
    pub async fn list_my_requests(
        &self,
        actor: Actor,
    ) -> ServiceResult<Vec<PartnershipRequestResponse>> {
        let requests = self
            .ctx
            .request_repo()
            .find_by_requester(actor.user_id)
            .await?;

        let now = self.ctx.now();
        Ok(requests
            .iter()
            .map(|r| PartnershipRequestResponse::from_entity(r, now))
            .collect())
    }

    /// Moderation review queue, bucketed by state
    #[instrument(skip(self), fields(reviewer_id = %actor.user_id))]
    pub async fn review_queue(&self, actor: Actor) -> ServiceResult<ReviewQueueResponse> {
        self.require_reviewer(&actor)?;

        let requests = self.ctx.request_repo().list_all().await?;
        let buckets = RequestBuckets::partition(requests);

        Ok(ReviewQueueResponse::from_buckets(buckets, self.ctx.now()))
    }

    /// Active partner listings for the public partner page
    #[instrument(skip(self))]
    pub async fn active_listings(&self) -> ServiceResult<Vec<PartnershipListingResponse>> {
        let listings = self.ctx.listing_repo().list_active().await?;
        Ok(listings
            .into_iter()
            .map(PartnershipListingResponse::from)
            .collect())
    }

    /// Every listing, active or not; reviewers only
    #[instrument(skip(self), fields(reviewer_id = %actor.user_id))]
    pub async fn all_listings(
        &self,
        actor: Actor,
    ) -> ServiceResult<Vec<PartnershipListingResponse>> {
        self.require_reviewer(&actor)?;

        let listings = self.ctx.listing_repo().list_all().await?;
        Ok(listings
            .into_iter()
            .map(PartnershipListingResponse::from)
            .collect())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load_request(&self, id: Snowflake) -> ServiceResult<PartnershipRequest> {
        self.ctx
            .request_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RequestNotFound(id)))
    }

    fn require_reviewer(&self, actor: &Actor) -> ServiceResult<()> {
        if actor.is_reviewer() {
            Ok(())
        } else {
            Err(DomainError::MissingRole {
                required: "moderator",
            }
            .into())
        }
    }

    fn require_owner(&self, actor: &Actor, request: &PartnershipRequest) -> ServiceResult<()> {
        if actor.owns(request.requester_id) {
            Ok(())
        } else {
            Err(DomainError::NotRequestOwner.into())
        }
    }
}
