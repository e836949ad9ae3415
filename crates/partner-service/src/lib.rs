//! # partner-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{HealthResponse, ReadinessResponse};
pub use services::{
    PartnershipService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
