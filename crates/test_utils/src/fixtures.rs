//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims and historical corpora. Scenario corpora are
//! fixed so that scores computed against them are predictable; the random
//! corpus helpers use `fake` and are meant for range checks only.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimType};

use crate::builders::TestClaimBuilder;

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard creation time for fixture claims (Mar 15, 2024 10:30 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    /// Creation time `days` after the standard submission time
    pub fn days_later(days: i64) -> DateTime<Utc> {
        Self::submitted_at() + chrono::Duration::days(days)
    }

    /// Standard claimant date of birth
    pub fn date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 6, 20).unwrap()
    }
}

/// Fixture for claimant names
pub struct NameFixtures;

impl NameFixtures {
    pub fn john_doe() -> &'static str {
        "John Doe"
    }

    pub fn jane_smith() -> &'static str {
        "Jane Smith"
    }

    /// Name containing the word "test"
    pub fn test_claimant() -> &'static str {
        "Test User"
    }

    /// A random full name
    pub fn random_full_name() -> String {
        Name().fake()
    }
}

/// Fixture for claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A valid, unpersisted AUTO claim for John Doe of $1,000.00
    pub fn john_doe_auto() -> Claim {
        TestClaimBuilder::new().build()
    }

    /// A valid claim carrying an id, as if read back from the store
    pub fn persisted_auto() -> Claim {
        TestClaimBuilder::new().with_id(ClaimId::new()).build()
    }

    /// A claim with every field missing
    pub fn empty() -> Claim {
        TestClaimBuilder::new()
            .without_claimant_name()
            .without_amount()
            .without_type()
            .build()
    }

    /// A claim failing every validation rule except the type rule
    pub fn invalid_name_and_amount() -> Claim {
        TestClaimBuilder::new()
            .with_claimant_name("")
            .with_amount(dec!(-100))
            .build()
    }
}

/// Fixture for historical corpora
pub struct CorpusFixtures;

impl CorpusFixtures {
    /// Three modest claims of mixed AUTO/HEALTH type: 500, 750, 600
    pub fn modest_mixed() -> Vec<Claim> {
        vec![
            corpus_claim("Alice Brown", dec!(500), ClaimType::Auto, 0),
            corpus_claim("Bob Green", dec!(750), ClaimType::Health, 1),
            corpus_claim("Carol White", dec!(600), ClaimType::Auto, 2),
        ]
    }

    /// John Doe twice (AUTO, HEALTH) plus one unrelated PROPERTY claim
    pub fn repeat_claimant() -> Vec<Claim> {
        vec![
            corpus_claim(NameFixtures::john_doe(), dec!(1000), ClaimType::Auto, 0),
            corpus_claim(NameFixtures::john_doe(), dec!(1500), ClaimType::Health, 1),
            corpus_claim(NameFixtures::jane_smith(), dec!(5000), ClaimType::Property, 2),
        ]
    }

    /// Claims that all share a single amount
    pub fn uniform_amounts(amount: Decimal, len: usize) -> Vec<Claim> {
        (0..len)
            .map(|i| corpus_claim(&format!("Claimant {i}"), amount, ClaimType::Auto, i as i64))
            .collect()
    }

    /// A corpus of `len` claims with random names, amounts, and types
    pub fn random(len: usize) -> Vec<Claim> {
        (0..len)
            .map(|i| {
                let cents: i64 = (1_000..5_000_000).fake();
                let type_index: usize = (0..ClaimType::ALL.len()).fake();
                corpus_claim(
                    &NameFixtures::random_full_name(),
                    Decimal::new(cents, 2),
                    ClaimType::ALL[type_index],
                    i as i64,
                )
            })
            .collect()
    }
}

fn corpus_claim(name: &str, amount: Decimal, claim_type: ClaimType, day: i64) -> Claim {
    TestClaimBuilder::new()
        .with_id(ClaimId::new())
        .with_claimant_name(name)
        .with_amount(amount)
        .with_type(claim_type)
        .with_created_at(TemporalFixtures::days_later(day))
        .build()
}
