//! Partnership listing database model

use sqlx::FromRow;

/// Database model for the partnership_listings table
#[derive(Debug, Clone, FromRow)]
pub struct ListingModel {
    pub id: i64,
    pub request_id: i64,
    pub is_active: bool,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub member_count: i32,
    pub logo_url: Option<String>,
}
