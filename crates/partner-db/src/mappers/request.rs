//! Partnership request entity <-> model mapper

use partner_core::entities::PartnershipRequest;
use partner_core::error::DomainError;
use partner_core::value_objects::Snowflake;

use crate::models::RequestModel;

/// Convert RequestModel to PartnershipRequest entity
///
/// Fallible because the stored status text must parse to a known state.
impl TryFrom<RequestModel> for PartnershipRequest {
    type Error = DomainError;

    fn try_from(model: RequestModel) -> Result<Self, Self::Error> {
        Ok(PartnershipRequest {
            id: Snowflake::new(model.id),
            requester_id: Snowflake::new(model.requester_id),
            status: model.status.parse()?,
            is_renewal: model.is_renewal,
            is_active: model.is_active,
            created_at: model.created_at,
            renewed_at: model.renewed_at,
            expiration_date: model.expiration_date,
            name: model.name,
            description: model.description,
            website: model.website,
            logo_url: model.logo_url,
            reason: model.reason,
            requirements: model.requirements,
            other_partners_info: model.other_partners_info,
            discord_invite: model.discord_invite,
            member_count: model.member_count,
        })
    }
}
