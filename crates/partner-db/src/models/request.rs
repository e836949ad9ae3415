//! Partnership request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the partnership_requests table
///
/// `status` is stored as lowercase text and parsed in the mapper; the table
/// carries a CHECK constraint matching the domain states.
#[derive(Debug, Clone, FromRow)]
pub struct RequestModel {
    pub id: i64,
    pub requester_id: i64,
    pub status: String,
    pub is_renewal: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub renewed_at: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
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
