//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The request repository is the aggregate
//! root: it owns transition application, including the accompanying listing
//! write, so that a transition commits atomically or not at all.

use async_trait::async_trait;

use crate::entities::{ListingSync, PartnershipListing, PartnershipRequest, RequestStatus};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Partnership Request Repository
// ============================================================================

#[async_trait]
pub trait PartnershipRequestRepository: Send + Sync {
    /// Find a request by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PartnershipRequest>>;

    /// List a requester's requests, newest submission first
    async fn find_by_requester(
        &self,
        requester_id: Snowflake,
    ) -> RepoResult<Vec<PartnershipRequest>>;

    /// Whether the requester has a non-rejected request
    async fn has_open_request(&self, requester_id: Snowflake) -> RepoResult<bool>;

    /// List all requests, newest submission first
    async fn list_all(&self) -> RepoResult<Vec<PartnershipRequest>>;

    /// Persist a newly submitted request
    ///
    /// Fails with `DomainError::DuplicateOpenRequest` when the requester
    /// already has an open (non-rejected) request.
    async fn create(&self, request: &PartnershipRequest) -> RepoResult<()>;

    /// Apply a completed transition atomically
    ///
    /// Writes the request's mutated fields, conditional on the stored status
    /// still being `expected` (optimistic concurrency), and applies the
    /// accompanying listing write in the same transaction. A stale status
    /// yields `DomainError::TransitionConflict` with nothing written.
    async fn apply_transition(
        &self,
        request: &PartnershipRequest,
        expected: RequestStatus,
        listing: Option<&ListingSync>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Partnership Listing Repository
// ============================================================================

/// Read-side access to listings
///
/// Listing writes only happen through
/// [`PartnershipRequestRepository::apply_transition`].
#[async_trait]
pub trait PartnershipListingRepository: Send + Sync {
    /// Find the listing derived from a request, if it was ever approved
    async fn find_by_request(
        &self,
        request_id: Snowflake,
    ) -> RepoResult<Option<PartnershipListing>>;

    /// List active listings for the public partner page
    async fn list_active(&self) -> RepoResult<Vec<PartnershipListing>>;

    /// List every listing, active or not
    async fn list_all(&self) -> RepoResult<Vec<PartnershipListing>>;
}
