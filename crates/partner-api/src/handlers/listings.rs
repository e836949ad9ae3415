//! Partner listing handlers
//!
//! Endpoints for the public partner page and the moderation view of
//! every listing.

use axum::{extract::State, Json};
use partner_service::dto::PartnershipListingResponse;
use partner_service::PartnershipService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Active partner listings (no auth required)
///
/// GET /partners
pub async fn get_active_listings(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PartnershipListingResponse>>> {
    let service = PartnershipService::new(state.service_context());
    let listings = service.active_listings().await?;
    Ok(Json(listings))
}

/// Every listing, active or not; reviewers only
///
/// GET /partners/all
pub async fn get_all_listings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PartnershipListingResponse>>> {
    let service = PartnershipService::new(state.service_context());
    let listings = service.all_listings(auth.actor).await?;
    Ok(Json(listings))
}
