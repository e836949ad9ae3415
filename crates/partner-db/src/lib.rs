//! # partner-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `partner-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including atomic transition application
//!
//! ## Usage
//!
//! ```rust,ignore
//! use partner_db::pool::{create_pool, DatabaseConfig};
//! use partner_db::repositories::PgPartnershipRequestRepository;
//! use partner_core::PartnershipRequestRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let request_repo = PgPartnershipRequestRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPartnershipListingRepository, PgPartnershipRequestRepository};
