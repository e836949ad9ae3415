//! Partnership listing entity - the public-facing record shown to visitors
//! once a request has been approved
//!
//! A listing exists iff its request was approved at least once; it is never
//! deleted afterwards, only flagged inactive. Its display fields mirror the
//! request payload as of the latest approval.

use crate::value_objects::Snowflake;

use super::PartnershipRequest;

/// Public partner listing entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnershipListing {
    pub id: Snowflake,
    /// The request this listing was derived from (at most one listing each)
    pub request_id: Snowflake,
    /// Mirrors the request's live state for public display
    pub is_active: bool,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub member_count: i32,
    pub logo_url: Option<String>,
}

impl PartnershipListing {
    /// Build the listing for a freshly approved request
    pub fn from_request(id: Snowflake, request: &PartnershipRequest) -> Self {
        Self {
            id,
            request_id: request.id,
            is_active: true,
            name: request.name.clone(),
            description: request.description.clone(),
            website: request.website.clone(),
            member_count: request.member_count,
            logo_url: request.logo_url.clone(),
        }
    }

    /// Refresh display fields from the request on re-approval and reactivate
    pub fn refresh_from(&mut self, request: &PartnershipRequest) {
        self.name = request.name.clone();
        self.description = request.description.clone();
        self.website = request.website.clone();
        self.member_count = request.member_count;
        self.logo_url = request.logo_url.clone();
        self.is_active = true;
    }

    /// Mark the listing inactive for public display
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// Listing write accompanying a request transition
///
/// Transition application is the only path that writes listings, and the
/// store applies the request write and this listing write in one atomic
/// unit, so request and listing activity can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSync {
    /// First approval: insert a new listing
    Create(PartnershipListing),
    /// Re-approval: overwrite display fields and reactivate
    Refresh(PartnershipListing),
    /// Partnership ended: flip the listing inactive, keyed by request id
    Deactivate(Snowflake),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Submission;
    use chrono::{TimeZone, Utc};

    fn request() -> PartnershipRequest {
        PartnershipRequest::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Submission {
                name: "Ferris Fan Club".to_string(),
                description: Some("Crustacean appreciation".to_string()),
                website: None,
                logo_url: Some("https://cdn.example.com/ferris.png".to_string()),
                reason: "shared audience".to_string(),
                requirements: None,
                other_partners_info: None,
                discord_invite: "https://discord.gg/ferris".to_string(),
                member_count: 1200,
            },
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_listing_from_request() {
        let req = request();
        let listing = PartnershipListing::from_request(Snowflake::new(99), &req);

        assert_eq!(listing.request_id, req.id);
        assert!(listing.is_active);
        assert_eq!(listing.name, "Ferris Fan Club");
        assert_eq!(listing.member_count, 1200);
    }

    #[test]
    fn test_refresh_reactivates_and_updates_fields() {
        let mut req = request();
        let mut listing = PartnershipListing::from_request(Snowflake::new(99), &req);
        listing.deactivate();

        req.name = "Ferris Fan Club International".to_string();
        req.member_count = 2400;
        listing.refresh_from(&req);

        assert!(listing.is_active);
        assert_eq!(listing.name, "Ferris Fan Club International");
        assert_eq!(listing.member_count, 2400);
    }
}
