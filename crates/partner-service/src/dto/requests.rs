//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Partnership Requests
// ============================================================================

/// Submit a new partnership application
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitPartnershipRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    #[validate(url(message = "Invalid logo URL"))]
    pub logo_url: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Reason must be 1-2000 characters"))]
    pub reason: String,

    #[validate(length(max = 2000, message = "Requirements must be at most 2000 characters"))]
    pub requirements: Option<String>,

    #[validate(length(max = 2000, message = "Partner info must be at most 2000 characters"))]
    pub other_partners_info: Option<String>,

    #[validate(url(message = "Invalid Discord invite URL"))]
    pub discord_invite: String,

    #[validate(range(min = 0, message = "Member count cannot be negative"))]
    pub member_count: i32,
}

/// Approve a pending partnership request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ApprovePartnershipRequest {
    /// Validity window in days; the configured default applies when absent
    #[validate(range(min = 1, max = 365, message = "Duration must be 1-365 days"))]
    pub duration_days: Option<i64>,
}

/// Ask for an approved partnership to be re-validated
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenewPartnershipRequest {
    #[validate(length(min = 1, max = 2000, message = "Justification must be 1-2000 characters"))]
    pub justification: String,
}
