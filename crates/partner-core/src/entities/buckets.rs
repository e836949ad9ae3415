//! Review-queue partitioning of requests by status

use super::{PartnershipRequest, RequestStatus};

/// Requests grouped into the four moderator display buckets
#[derive(Debug, Clone, Default)]
pub struct RequestBuckets {
    /// Pending first-time applications
    pub pending: Vec<PartnershipRequest>,
    /// Pending renewals of an existing partnership
    pub renewals: Vec<PartnershipRequest>,
    /// Approved requests (live or expired; callers derive which)
    pub approved: Vec<PartnershipRequest>,
    /// Rejected requests, kept as history
    pub rejected: Vec<PartnershipRequest>,
}

impl RequestBuckets {
    /// Partition a request collection into display buckets
    pub fn partition(requests: impl IntoIterator<Item = PartnershipRequest>) -> Self {
        let mut buckets = Self::default();
        for request in requests {
            match request.status {
                RequestStatus::Pending if request.is_renewal => buckets.renewals.push(request),
                RequestStatus::Pending => buckets.pending.push(request),
                RequestStatus::Approved => buckets.approved.push(request),
                RequestStatus::Rejected => buckets.rejected.push(request),
            }
        }
        buckets
    }

    /// Total number of requests across all buckets
    pub fn len(&self) -> usize {
        self.pending.len() + self.renewals.len() + self.approved.len() + self.rejected.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
