//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::RequestStatus;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Partnership request not found: {0}")]
    RequestNotFound(Snowflake),

    #[error("Partnership listing not found for request: {0}")]
    ListingNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid approval duration: {days} days")]
    InvalidDuration { days: i64 },

    // =========================================================================
    // Transition Errors
    // =========================================================================
    #[error("Cannot {event} a request in status {status}")]
    InvalidTransition {
        event: &'static str,
        status: RequestStatus,
    },

    /// The request changed under us between read and write (stale status)
    #[error("Request {0} was modified concurrently; transition not applied")]
    TransitionConflict(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Caller lacks the required role: {required}")]
    MissingRole { required: &'static str },

    #[error("Caller is not the owner of this request")]
    NotRequestOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Requester {0} already has an open partnership request")]
    DuplicateOpenRequest(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::ListingNotFound(_) => "UNKNOWN_LISTING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidDuration { .. } => "INVALID_DURATION",

            // Transition
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::TransitionConflict(_) => "TRANSITION_CONFLICT",

            // Authorization
            Self::MissingRole { .. } => "MISSING_ROLE",
            Self::NotRequestOwner => "NOT_REQUEST_OWNER",

            // Conflict
            Self::DuplicateOpenRequest(_) => "DUPLICATE_OPEN_REQUEST",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestNotFound(_) | Self::ListingNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingField(_) | Self::InvalidDuration { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingRole { .. } | Self::NotRequestOwner)
    }

    /// Check if this is a conflict error (including rejected transitions,
    /// which the caller must not blindly retry)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateOpenRequest(_)
                | Self::TransitionConflict(_)
                | Self::InvalidTransition { .. }
        )
    }

    /// Check if the caller may retry the same operation unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}
