//! PostgreSQL repository implementations

mod error;
mod listing;
mod request;

pub use listing::PgPartnershipListingRepository;
pub use request::PgPartnershipRequestRepository;
