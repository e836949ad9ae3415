//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use partner_core::entities::RequestStatus;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Partnership Responses
// ============================================================================

/// Partnership request with its derived expiration state
///
/// `expiration_date`, `is_expired` and `is_live` are computed against the
/// service clock at response time; nothing here is written back.
#[derive(Debug, Clone, Serialize)]
pub struct PartnershipRequestResponse {
    pub id: String,
    pub requester_id: String,
    pub status: RequestStatus,
    pub is_renewal: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewed_at: Option<DateTime<Utc>>,
    pub expiration_date: DateTime<Utc>,
    pub is_expired: bool,
    pub is_live: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_partners_info: Option<String>,
    pub discord_invite: String,
    pub member_count: i32,
}

/// Public partner listing
#[derive(Debug, Clone, Serialize)]
pub struct PartnershipListingResponse {
    pub id: String,
    pub request_id: String,
    pub is_active: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub member_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Moderation review queue, requests bucketed by state
#[derive(Debug, Serialize)]
pub struct ReviewQueueResponse {
    /// First-time applications awaiting review
    pub pending: Vec<PartnershipRequestResponse>,
    /// Renewal applications awaiting review
    pub renewals: Vec<PartnershipRequestResponse>,
    pub approved: Vec<PartnershipRequestResponse>,
    pub rejected: Vec<PartnershipRequestResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
