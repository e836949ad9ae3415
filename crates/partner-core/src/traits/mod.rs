//! Repository traits (ports)

mod repositories;

pub use repositories::{PartnershipListingRepository, PartnershipRequestRepository, RepoResult};
