//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use partner_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with request_id
#[derive(Debug, serde::Deserialize)]
pub struct RequestIdPath {
    pub request_id: String,
}

impl RequestIdPath {
    /// Parse request_id as Snowflake
    pub fn request_id(&self) -> Result<Snowflake, ApiError> {
        self.request_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid request_id format"))
    }
}
