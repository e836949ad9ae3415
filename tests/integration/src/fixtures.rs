//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Partnership application body
#[derive(Debug, Serialize)]
pub struct SubmitPartnershipBody {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub reason: String,
    pub requirements: Option<String>,
    pub other_partners_info: Option<String>,
    pub discord_invite: String,
    pub member_count: i32,
}

impl SubmitPartnershipBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Community {suffix}"),
            description: Some("A community for integration testing".to_string()),
            website: Some("https://example.com".to_string()),
            logo_url: None,
            reason: "We want to cross-promote events".to_string(),
            requirements: None,
            other_partners_info: None,
            discord_invite: format!("https://discord.gg/test{suffix}"),
            member_count: 250,
        }
    }
}

/// Approval body with an explicit duration
#[derive(Debug, Serialize)]
pub struct ApproveBody {
    pub duration_days: Option<i64>,
}

/// Renewal request body
#[derive(Debug, Serialize)]
pub struct RenewalBody {
    pub justification: String,
}

impl RenewalBody {
    pub fn simple() -> Self {
        Self {
            justification: "Partnership has been active and both sides want to continue"
                .to_string(),
        }
    }
}

/// Partnership request response
#[derive(Debug, Deserialize)]
pub struct RequestResponse {
    pub id: String,
    pub requester_id: String,
    pub status: String,
    pub is_renewal: bool,
    pub is_active: bool,
    pub created_at: String,
    pub renewed_at: Option<String>,
    pub expiration_date: String,
    pub is_expired: bool,
    pub is_live: bool,
    pub name: String,
    pub reason: String,
    pub discord_invite: String,
    pub member_count: i32,
}

/// Partner listing response
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub id: String,
    pub request_id: String,
    pub is_active: bool,
    pub name: String,
    pub member_count: i32,
}

/// Review queue response
#[derive(Debug, Deserialize)]
pub struct ReviewQueueResponse {
    pub pending: Vec<RequestResponse>,
    pub renewals: Vec<RequestResponse>,
    pub approved: Vec<RequestResponse>,
    pub rejected: Vec<RequestResponse>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
