//! Assessment DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus, ClaimType};

/// A claim as submitted over the wire
///
/// Every field is optional and the type arrives as a raw string, so that
/// malformed input reaches validation instead of being rejected by the
/// JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClaimPayload {
    pub id: Option<ClaimId>,
    pub claimant_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub claim_amount: Option<Decimal>,
    pub claim_type: Option<String>,
    pub status: Option<ClaimStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub fraud_score: Option<Decimal>,
}

impl ClaimPayload {
    /// Converts to a domain claim; an unknown type code becomes `None`
    pub fn into_claim(self) -> Claim {
        let mut claim = Claim::blank();
        claim.id = self.id;
        claim.claimant_name = self.claimant_name;
        claim.first_name = self.first_name;
        claim.last_name = self.last_name;
        claim.date_of_birth = self.date_of_birth;
        claim.claim_amount = self.claim_amount;
        claim.claim_type = self.claim_type.as_deref().and_then(|raw| {
            raw.parse::<ClaimType>()
                .map_err(|err| debug!(error = %err, "Claim type left unset"))
                .ok()
        });
        claim.status = self.status.unwrap_or_default();
        if let Some(created_at) = self.created_at {
            claim.created_at = created_at;
        }
        claim.fraud_score = self.fraud_score;
        claim
    }
}

impl From<ClaimPayload> for Claim {
    fn from(payload: ClaimPayload) -> Self {
        payload.into_claim()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
