//! Test Data Builders
//!
//! Provides a builder for claims with sensible defaults. Tests specify only
//! the fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus, ClaimType};

use crate::fixtures::{NameFixtures, TemporalFixtures};

/// Builder for constructing test claims
///
/// Defaults to a valid AUTO claim for "John Doe" of 1000.00 created at
/// [`TemporalFixtures::submitted_at`], with no id.
pub struct TestClaimBuilder {
    id: Option<ClaimId>,
    claimant_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    claim_amount: Option<Decimal>,
    claim_type: Option<ClaimType>,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
    fraud_score: Option<Decimal>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            claimant_name: Some(NameFixtures::john_doe().to_string()),
            first_name: None,
            last_name: None,
            date_of_birth: None,
            claim_amount: Some(dec!(1000.00)),
            claim_type: Some(ClaimType::Auto),
            status: ClaimStatus::New,
            created_at: TemporalFixtures::submitted_at(),
            fraud_score: None,
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = Some(name.into());
        self
    }

    pub fn without_claimant_name(mut self) -> Self {
        self.claimant_name = None;
        self
    }

    /// Sets first name, last name, and date of birth
    pub fn with_profile(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self.date_of_birth = Some(TemporalFixtures::date_of_birth());
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = Some(amount);
        self
    }

    pub fn without_amount(mut self) -> Self {
        self.claim_amount = None;
        self
    }

    pub fn with_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = Some(claim_type);
        self
    }

    /// Leaves the type unset, as the transport layer does for unknown codes
    pub fn without_type(mut self) -> Self {
        self.claim_type = None;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_fraud_score(mut self, score: Decimal) -> Self {
        self.fraud_score = Some(score);
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            claimant_name: self.claimant_name,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            claim_amount: self.claim_amount,
            claim_type: self.claim_type,
            status: self.status,
            created_at: self.created_at,
            fraud_score: self.fraud_score,
        }
    }
}
