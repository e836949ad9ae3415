//! Partnership listing entity <-> model mapper

use partner_core::entities::PartnershipListing;
use partner_core::value_objects::Snowflake;

use crate::models::ListingModel;

/// Convert ListingModel to PartnershipListing entity
impl From<ListingModel> for PartnershipListing {
    fn from(model: ListingModel) -> Self {
        PartnershipListing {
            id: Snowflake::new(model.id),
            request_id: Snowflake::new(model.request_id),
            is_active: model.is_active,
            name: model.name,
            description: model.description,
            website: model.website,
            member_count: model.member_count,
            logo_url: model.logo_url,
        }
    }
}
