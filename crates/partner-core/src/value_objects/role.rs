//! Caller roles and the authenticated actor
//!
//! The lifecycle coordinator is the trust boundary: every operation receives
//! an [`Actor`] built from a verified token and checks the role itself rather
//! than trusting the calling UI.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snowflake;

/// Role carried by an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular authenticated end user (may apply for partnership)
    Applicant,
    /// May review pending requests and renewals
    Moderator,
    /// May review, plus full administrative read access
    Admin,
}

impl Role {
    /// Whether this role may approve or reject partnership requests
    #[inline]
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }

    /// Canonical lowercase name, as stored in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applicant" => Ok(Self::Applicant),
            "moderator" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError::Unknown),
        }
    }
}

/// Error when parsing a role name
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoleParseError {
    #[error("unknown role name")]
    Unknown,
}

/// Authenticated caller identity passed into every coordinator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Snowflake,
    pub role: Role,
}

impl Actor {
    /// Create a new Actor
    pub fn new(user_id: Snowflake, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Whether this actor may approve or reject requests
    #[inline]
    pub fn is_reviewer(&self) -> bool {
        self.role.can_review()
    }

    /// Whether this actor owns the given requester id
    #[inline]
    pub fn owns(&self, requester_id: Snowflake) -> bool {
        self.user_id == requester_id
    }
}
