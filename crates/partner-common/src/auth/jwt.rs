//! JWT utilities for role-bearing access tokens
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use partner_core::{Actor, Role, Snowflake};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Caller role (applicant, moderator, admin)
    pub role: Role,
}

impl Claims {
    /// Get the user ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Build the authenticated actor carried into the coordinator
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid Snowflake
    pub fn actor(&self) -> Result<Actor, AppError> {
        Ok(Actor::new(self.user_id()?, self.role))
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry time
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Sign an access token for a user with the given role
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, user_id: Snowflake, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            role,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return the authenticated actor
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn validate_actor(&self, token: &str) -> Result<Actor, AppError> {
        self.decode_token(token)?.actor()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
