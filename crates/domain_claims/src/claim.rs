//! Claim entity
//!
//! Claims are owned by the external claim store. The assessment engines
//! receive them by reference; the only field they ever change is
//! `fraud_score`, and only through `ClaimAssessmentService::score`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, Money};
use crate::error::ClaimError;

/// Line of business a claim is filed under
///
/// Declaration order is significant: validation messages list the
/// variants in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimType {
    Auto,
    Health,
    Property,
    Life,
}

impl ClaimType {
    /// Every claim type, in declaration order
    pub const ALL: [ClaimType; 4] = [
        ClaimType::Auto,
        ClaimType::Health,
        ClaimType::Property,
        ClaimType::Life,
    ];

    /// Upper-case code used for display and routing queues
    pub fn code(&self) -> &'static str {
        match self {
            ClaimType::Auto => "AUTO",
            ClaimType::Health => "HEALTH",
            ClaimType::Property => "PROPERTY",
            ClaimType::Life => "LIFE",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    /// Parses a claim type code, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        ClaimType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ClaimError::InvalidClaimType(s.to_string()))
    }
}

/// Processing status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    /// Submitted, not yet looked at
    #[default]
    New,
    /// Under review by an adjuster
    Review,
    Approved,
    Rejected,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClaimStatus::New => "NEW",
            ClaimStatus::Review => "REVIEW",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
        })
    }
}

/// An insurance claim submitted for assessment
///
/// Most fields are optional because claims arrive from the transport layer
/// unchecked; `ValidationEngine` is what decides whether they are usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Assigned by the claim store; `None` until persisted
    pub id: Option<ClaimId>,
    /// Name of the person filing the claim
    pub claimant_name: Option<String>,
    /// Given name, when captured separately
    pub first_name: Option<String>,
    /// Family name, when captured separately
    pub last_name: Option<String>,
    /// Claimant date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Amount claimed, in USD
    pub claim_amount: Option<Decimal>,
    /// Line of business
    pub claim_type: Option<ClaimType>,
    /// Processing status
    pub status: ClaimStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last computed fraud score, scale 2
    pub fraud_score: Option<Decimal>,
}

impl Claim {
    /// Creates a new, unpersisted claim with status `NEW`
    pub fn new(claimant_name: impl Into<String>, claim_amount: Decimal, claim_type: ClaimType) -> Self {
        Self {
            id: None,
            claimant_name: Some(claimant_name.into()),
            first_name: None,
            last_name: None,
            date_of_birth: None,
            claim_amount: Some(claim_amount),
            claim_type: Some(claim_type),
            status: ClaimStatus::New,
            created_at: Utc::now(),
            fraud_score: None,
        }
    }

    /// Returns a claim with no fields populated
    pub fn blank() -> Self {
        Self {
            id: None,
            claimant_name: None,
            first_name: None,
            last_name: None,
            date_of_birth: None,
            claim_amount: None,
            claim_type: None,
            status: ClaimStatus::New,
            created_at: Utc::now(),
            fraud_score: None,
        }
    }

    /// Sets the id
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the split name and date of birth
    pub fn with_profile(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Returns true once the store has assigned an identity
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Claim amount as USD money, if present
    pub fn amount_money(&self) -> Option<Money> {
        self.claim_amount.map(Money::usd)
    }

    /// Case-insensitive comparison of claimant names
    pub fn same_claimant(&self, other: &Claim) -> bool {
        match (&self.claimant_name, &other.claimant_name) {
            (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => false,
        }
    }
}
