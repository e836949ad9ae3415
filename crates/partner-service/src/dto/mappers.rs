//! Mappers for converting domain entities to response DTOs
//!
//! Request responses need the evaluation time because expiration is derived,
//! so they are built through `PartnershipRequestResponse::from_entity` rather
//! than a plain `From` impl.

use chrono::{DateTime, Utc};
use partner_core::entities::{PartnershipListing, PartnershipRequest, RequestBuckets};

use super::responses::{
    PartnershipListingResponse, PartnershipRequestResponse, ReviewQueueResponse,
};

impl PartnershipRequestResponse {
    /// Build a response from an entity, deriving expiration state at `now`
    #[must_use]
    pub fn from_entity(request: &PartnershipRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: request.id.to_string(),
            requester_id: request.requester_id.to_string(),
            status: request.status,
            is_renewal: request.is_renewal,
            is_active: request.is_active,
            created_at: request.created_at,
            renewed_at: request.renewed_at,
            expiration_date: request.effective_expiration(),
            is_expired: request.is_expired(now),
            is_live: request.is_live(now),
            name: request.name.clone(),
            description: request.description.clone(),
            website: request.website.clone(),
            logo_url: request.logo_url.clone(),
            reason: request.reason.clone(),
            requirements: request.requirements.clone(),
            other_partners_info: request.other_partners_info.clone(),
            discord_invite: request.discord_invite.clone(),
            member_count: request.member_count,
        }
    }
}

impl From<PartnershipListing> for PartnershipListingResponse {
    fn from(listing: PartnershipListing) -> Self {
        Self {
            id: listing.id.to_string(),
            request_id: listing.request_id.to_string(),
            is_active: listing.is_active,
            name: listing.name,
            description: listing.description,
            website: listing.website,
            member_count: listing.member_count,
            logo_url: listing.logo_url,
        }
    }
}

impl ReviewQueueResponse {
    /// Build the queue response from partitioned buckets at `now`
    #[must_use]
    pub fn from_buckets(buckets: RequestBuckets, now: DateTime<Utc>) -> Self {
        let map = |requests: Vec<PartnershipRequest>| {
            requests
                .iter()
                .map(|r| PartnershipRequestResponse::from_entity(r, now))
                .collect()
        };

        Self {
            pending: map(buckets.pending),
            renewals: map(buckets.renewals),
            approved: map(buckets.approved),
            rejected: map(buckets.rejected),
        }
    }
}
