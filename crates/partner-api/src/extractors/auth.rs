//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header. The
//! resulting actor carries both the caller's ID and role so services can
//! enforce ownership and reviewer checks.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use partner_core::{Actor, Role, Snowflake};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's ID and role
    pub actor: Actor,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }

    /// User ID from the token subject
    #[must_use]
    pub fn user_id(&self) -> Snowflake {
        self.actor.user_id
    }

    /// Role carried in the token
    #[must_use]
    pub fn role(&self) -> Role {
        self.actor.role
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token and build the actor
        let actor = app_state
            .jwt_service()
            .validate_actor(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        Ok(AuthUser::new(actor))
    }
}
