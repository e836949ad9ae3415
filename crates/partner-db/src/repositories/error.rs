//! Error handling utilities for repositories

use partner_core::error::DomainError;
use partner_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::StorageError(e.to_string())
}

/// Create a "request not found" error
pub fn request_not_found(id: Snowflake) -> DomainError {
    DomainError::RequestNotFound(id)
}

/// Create a "listing not found" error
pub fn listing_not_found(request_id: Snowflake) -> DomainError {
    DomainError::ListingNotFound(request_id)
}
