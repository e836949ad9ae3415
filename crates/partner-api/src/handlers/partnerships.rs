//! Partnership request handlers
//!
//! Endpoints for the partnership request lifecycle: submission, review
//! decisions, renewal, and ending a partnership.

use axum::{
    extract::{Path, State},
    Json,
};
use partner_service::dto::{
    ApprovePartnershipRequest, PartnershipRequestResponse, RenewPartnershipRequest,
    ReviewQueueResponse, SubmitPartnershipRequest,
};
use partner_service::PartnershipService;

use crate::extractors::{AuthUser, OptionalValidatedJson, RequestIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a new partnership application
///
/// POST /partnerships
pub async fn submit_request(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<SubmitPartnershipRequest>,
) -> ApiResult<Created<Json<PartnershipRequestResponse>>> {
    let service = PartnershipService::new(state.service_context());
    let response = service.submit(auth.actor, body).await?;
    Ok(Created(Json(response)))
}

/// List the caller's own requests
///
/// GET /partnerships/@me
pub async fn get_my_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PartnershipRequestResponse>>> {
    let service = PartnershipService::new(state.service_context());
    let responses = service.list_my_requests(auth.actor).await?;
    Ok(Json(responses))
}

/// Moderation review queue, bucketed by state
///
/// GET /partnerships
pub async fn get_review_queue(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ReviewQueueResponse>> {
    let service = PartnershipService::new(state.service_context());
    let response = service.review_queue(auth.actor).await?;
    Ok(Json(response))
}

/// Get a single partnership request
///
/// GET /partnerships/{request_id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Json<PartnershipRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PartnershipService::new(state.service_context());
    let response = service.get_request(auth.actor, request_id).await?;
    Ok(Json(response))
}

/// Approve a pending request or renewal
///
/// POST /partnerships/{request_id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<ApprovePartnershipRequest>,
) -> ApiResult<Json<PartnershipRequestResponse>> {
    let request_id = path.request_id()?;

    // An empty body means the configured default duration
    let body = body.unwrap_or_default();

    let service = PartnershipService::new(state.service_context());
    let response = service.approve(auth.actor, request_id, body).await?;
    Ok(Json(response))
}

/// Reject a pending request or renewal
///
/// POST /partnerships/{request_id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Json<PartnershipRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PartnershipService::new(state.service_context());
    let response = service.reject(auth.actor, request_id).await?;
    Ok(Json(response))
}

/// Ask for an approved partnership to be re-validated
///
/// POST /partnerships/{request_id}/renewal
pub async fn request_renewal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
    ValidatedJson(body): ValidatedJson<RenewPartnershipRequest>,
) -> ApiResult<Json<PartnershipRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PartnershipService::new(state.service_context());
    let response = service.request_renewal(auth.actor, request_id, body).await?;
    Ok(Json(response))
}

/// End an approved, active partnership
///
/// POST /partnerships/{request_id}/end
pub async fn end_partnership(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RequestIdPath>,
) -> ApiResult<Json<PartnershipRequestResponse>> {
    let request_id = path.request_id()?;

    let service = PartnershipService::new(state.service_context());
    let response = service.end_partnership(auth.actor, request_id).await?;
    Ok(Json(response))
}
