//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, unique_user_id, TestServer,
};
use partner_core::Role;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = SubmitPartnershipBody::unique();

    let response = server.post("/api/v1/partnerships", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_submit_and_list_own_requests() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = unique_user_id();
    let token = server.issue_token(user, Role::Applicant).unwrap();

    let body = SubmitPartnershipBody::unique();
    let response = server
        .post_auth("/api/v1/partnerships", &token, &body)
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.status, "pending");
    assert_eq!(created.name, body.name);
    assert_eq!(created.requester_id, user.to_string());
    assert!(!created.is_renewal);
    assert!(!created.is_live);

    let response = server
        .get_auth("/api/v1/partnerships/@me", &token)
        .await
        .unwrap();
    let mine: Vec<RequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);
}

#[tokio::test]
async fn test_submit_rejects_invalid_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();

    let mut body = SubmitPartnershipBody::unique();
    body.website = Some("not a url".to_string());

    let response = server
        .post_auth("/api/v1/partnerships", &token, &body)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_open_request_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &token, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &token, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "DUPLICATE_OPEN_REQUEST");
}

// ============================================================================
// Review Decision Tests
// ============================================================================

#[tokio::test]
async fn test_approve_publishes_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let body = SubmitPartnershipBody::unique();
    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &body)
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Approve with no body: the configured default duration applies
    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();
    let approved: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(approved.status, "approved");
    assert!(approved.is_live);
    assert!(!approved.is_expired);

    // The listing is now on the public partner page
    let response = server.get("/api/v1/partners").await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listing = listings
        .iter()
        .find(|l| l.request_id == created.id)
        .expect("listing should be published");
    assert_eq!(listing.name, body.name);
    assert!(listing.is_active);
}

#[tokio::test]
async fn test_approve_with_explicit_duration() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let admin = server.issue_token(unique_user_id(), Role::Admin).unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &admin,
            &ApproveBody {
                duration_days: Some(90),
            },
        )
        .await
        .unwrap();
    let approved: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(approved.status, "approved");
}

#[tokio::test]
async fn test_approve_rejects_invalid_duration() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
            &ApproveBody {
                duration_days: Some(0),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_approve_requires_reviewer_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The requester cannot approve their own application
    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &applicant,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "MISSING_ROLE");
}

#[tokio::test]
async fn test_reject_frees_the_requester_slot() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/reject", created.id),
            &moderator,
        )
        .await
        .unwrap();
    let rejected: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.status, "rejected");
    assert!(!rejected.is_live);

    // No listing was published
    let response = server.get("/api/v1/partners").await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listings.iter().all(|l| l.request_id != created.id));

    // A rejected request no longer blocks a fresh application
    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_decided_request_cannot_be_decided_again() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/reject", created.id),
            &moderator,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TRANSITION");
}

// ============================================================================
// Renewal Tests
// ============================================================================

#[tokio::test]
async fn test_renewal_round_trip() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();

    // Owner asks for renewal; the partnership stays live while it waits
    let response = server
        .post_auth(
            &format!("/api/v1/partnerships/{}/renewal", created.id),
            &applicant,
            &RenewalBody::simple(),
        )
        .await
        .unwrap();
    let renewal: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renewal.status, "pending");
    assert!(renewal.is_renewal);
    assert!(renewal.renewed_at.is_some());

    let response = server.get("/api/v1/partners").await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listings.iter().any(|l| l.request_id == created.id));

    // Approving the renewal refreshes the existing listing, never duplicates it
    let response = server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();
    let approved: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(approved.status, "approved");
    assert!(approved.is_live);

    let response = server.get("/api/v1/partners").await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let matching: Vec<_> = listings
        .iter()
        .filter(|l| l.request_id == created.id)
        .collect();
    assert_eq!(matching.len(), 1);
}

#[tokio::test]
async fn test_renewal_is_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let other = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/partnerships/{}/renewal", created.id),
            &other,
            &RenewalBody::simple(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_REQUEST_OWNER");
}

// ============================================================================
// End Partnership Tests
// ============================================================================

#[tokio::test]
async fn test_end_partnership_deactivates_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/partnerships/{}/approve", created.id),
            &moderator,
        )
        .await
        .unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/partnerships/{}/end", created.id), &applicant)
        .await
        .unwrap();
    let ended: RequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ended.status, "approved");
    assert!(!ended.is_active);
    assert!(!ended.is_live);

    // Gone from the public page, still visible to reviewers
    let response = server.get("/api/v1/partners").await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listings.iter().all(|l| l.request_id != created.id));

    let response = server.get_auth("/api/v1/partners/all", &moderator).await.unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listing = listings
        .iter()
        .find(|l| l.request_id == created.id)
        .expect("listing should still exist");
    assert!(!listing.is_active);
}

// ============================================================================
// Read Surface Tests
// ============================================================================

#[tokio::test]
async fn test_get_request_visibility() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let other = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/partnerships/{}", created.id);

    // Owner and reviewers can read it
    let response = server.get_auth(&path, &applicant).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &moderator).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Another applicant cannot
    let response = server.get_auth(&path, &other).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_review_queue_requires_reviewer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let applicant = server
        .issue_token(unique_user_id(), Role::Applicant)
        .unwrap();
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server.get_auth("/api/v1/partnerships", &applicant).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/v1/partnerships", &applicant, &SubmitPartnershipBody::unique())
        .await
        .unwrap();
    let created: RequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/partnerships", &moderator).await.unwrap();
    let queue: ReviewQueueResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(queue.pending.iter().any(|r| r.id == created.id));
}

#[tokio::test]
async fn test_unknown_request_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .get_auth("/api/v1/partnerships/999999999999", &moderator)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_request_id_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let moderator = server
        .issue_token(unique_user_id(), Role::Moderator)
        .unwrap();

    let response = server
        .get_auth("/api/v1/partnerships/not-an-id", &moderator)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
