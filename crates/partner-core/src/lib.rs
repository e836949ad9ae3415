//! # partner-core
//!
//! Domain layer for the partnership lifecycle: entities, value objects,
//! repository traits, and the clock abstraction. This crate has zero
//! dependencies on infrastructure (database, web framework, etc.).

pub mod clock;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::{
    ListingSync, PartnershipListing, PartnershipRequest, RequestBuckets, RequestStatus,
    Submission,
};
pub use error::DomainError;
pub use traits::{PartnershipListingRepository, PartnershipRequestRepository, RepoResult};
pub use value_objects::{Actor, Role, Snowflake, SnowflakeGenerator, SnowflakeParseError};
