//! Domain entities - core business objects

mod buckets;
mod listing;
mod request;

pub use buckets::RequestBuckets;
pub use listing::{ListingSync, PartnershipListing};
pub use request::{PartnershipRequest, RequestStatus, Submission};
