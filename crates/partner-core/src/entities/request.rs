//! Partnership request entity - the application record tracking one
//! partnership relationship's approval state
//!
//! All transitions live here as pure methods; the service layer decides when
//! to call them and persists the result. Expiration is never written back,
//! it is derived from the stored dates at read time.

use chrono::{DateTime, Duration, Months, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Approval state of a partnership request
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Canonical lowercase name, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::InternalError(format!(
                "unknown request status: {other}"
            ))),
        }
    }
}

/// Submission payload for a new partnership application
///
/// Carries both the descriptive application fields and the partner
/// community's public profile, which seeds the listing at approval time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub reason: String,
    pub requirements: Option<String>,
    pub other_partners_info: Option<String>,
    pub discord_invite: String,
    pub member_count: i32,
}

/// Partnership request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnershipRequest {
    pub id: Snowflake,
    pub requester_id: Snowflake,
    pub status: RequestStatus,
    pub is_renewal: bool,
    pub is_active: bool,
    /// Original submission time; immutable for the lifetime of the row
    pub created_at: DateTime<Utc>,
    /// Last renewal submission time, if any
    pub renewed_at: Option<DateTime<Utc>>,
    /// Explicit expiration set at approval; authoritative when present
    pub expiration_date: Option<DateTime<Utc>>,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub reason: String,
    pub requirements: Option<String>,
    pub other_partners_info: Option<String>,
    pub discord_invite: String,
    pub member_count: i32,
}

impl PartnershipRequest {
    /// Create a new pending request from a submission
    ///
    /// # Errors
    /// Returns `DomainError::MissingField` if a required field is blank.
    pub fn new(
        id: Snowflake,
        requester_id: Snowflake,
        submission: Submission,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if submission.name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if submission.reason.trim().is_empty() {
            return Err(DomainError::MissingField("reason"));
        }
        if submission.discord_invite.trim().is_empty() {
            return Err(DomainError::MissingField("discord_invite"));
        }

        Ok(Self {
            id,
            requester_id,
            status: RequestStatus::Pending,
            is_renewal: false,
            is_active: false,
            created_at: now,
            renewed_at: None,
            expiration_date: None,
            name: submission.name,
            description: submission.description,
            website: submission.website,
            logo_url: submission.logo_url,
            reason: submission.reason,
            requirements: submission.requirements,
            other_partners_info: submission.other_partners_info,
            discord_invite: submission.discord_invite,
            member_count: submission.member_count,
        })
    }

    /// Anchor date for the fallback one-month expiration: the last
    /// submission time (renewal if any, else the original)
    #[inline]
    pub fn expiration_anchor(&self) -> DateTime<Utc> {
        self.renewed_at.unwrap_or(self.created_at)
    }

    /// Effective expiration: the explicit expiration date if set, otherwise
    /// one calendar month after the expiration anchor
    pub fn effective_expiration(&self) -> DateTime<Utc> {
        self.expiration_date.unwrap_or_else(|| {
            self.expiration_anchor()
                .checked_add_months(Months::new(1))
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        })
    }

    /// Whether the partnership window has elapsed at `now`
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.effective_expiration()
    }

    /// Whether the partnership is live: approved, active, and not expired
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.status == RequestStatus::Approved && self.is_active && !self.is_expired(now)
    }

    /// Approve a pending request (first-time or renewal)
    ///
    /// Sets the explicit expiration to `now + duration`. Returns whether the
    /// approved request was a renewal, read before the flag is cleared.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTransition` unless the request is pending.
    pub fn approve(
        &mut self,
        now: DateTime<Utc>,
        duration: Duration,
    ) -> Result<bool, DomainError> {
        if self.status != RequestStatus::Pending {
            return Err(self.invalid_transition("approve"));
        }

        let was_renewal = self.is_renewal;
        self.status = RequestStatus::Approved;
        self.is_active = true;
        self.is_renewal = false;
        self.expiration_date = Some(now + duration);
        Ok(was_renewal)
    }

    /// Reject a pending request or renewal
    ///
    /// Clears the active and renewal flags. The listing, if one exists from a
    /// previous approval, is deliberately untouched: rejecting a renewal does
    /// not retract a still-valid partnership.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTransition` unless the request is pending.
    pub fn reject(&mut self) -> Result<(), DomainError> {
        if self.status != RequestStatus::Pending {
            return Err(self.invalid_transition("reject"));
        }

        self.status = RequestStatus::Rejected;
        self.is_active = false;
        self.is_renewal = false;
        Ok(())
    }

    /// Ask for the approved partnership to be re-validated
    ///
    /// Moves the request back to pending with the renewal flag set and
    /// records the renewal time. `created_at` and `is_active` are untouched:
    /// a renewal requested before expiration keeps the partnership live while
    /// the decision is pending; one requested after expiration does not
    /// resurrect it.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTransition` unless the request is
    /// approved, or `DomainError::MissingField` if the justification is blank.
    pub fn request_renewal(
        &mut self,
        justification: String,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.status != RequestStatus::Approved {
            return Err(self.invalid_transition("request_renewal"));
        }
        if justification.trim().is_empty() {
            return Err(DomainError::MissingField("justification"));
        }

        self.status = RequestStatus::Pending;
        self.is_renewal = true;
        self.reason = justification;
        self.renewed_at = Some(now);
        Ok(())
    }

    /// End an approved, active partnership
    ///
    /// Only `is_active` flips; the status stays approved ("approved but
    /// ended" is distinct from rejected) and the expiration is untouched.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTransition` unless the request is
    /// approved and active.
    pub fn end(&mut self) -> Result<(), DomainError> {
        if self.status != RequestStatus::Approved || !self.is_active {
            return Err(self.invalid_transition("end_partnership"));
        }

        self.is_active = false;
        Ok(())
    }

    fn invalid_transition(&self, event: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            event,
            status: self.status,
        }
    }
}
