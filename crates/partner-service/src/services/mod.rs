//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, authorization, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod lifecycle;

// Re-export for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use lifecycle::PartnershipService;
