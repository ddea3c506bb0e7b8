//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims and corpora.

use chrono::{Duration, TimeZone, Utc};
use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimType};

use crate::builders::TestClaimBuilder;

/// Strategy for generating any claim type
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Auto),
        Just(ClaimType::Health),
        Just(ClaimType::Property),
        Just(ClaimType::Life),
    ]
}

/// Strategy for generating positive amounts with two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating amounts that may be zero or negative
pub fn any_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating non-blank claimant names
///
/// Drawn from a small pool so that repeat claimants occur often.
pub fn claimant_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("John Doe".to_string()),
        Just("JOHN DOE".to_string()),
        Just("Jane Smith".to_string()),
        Just("Madonna".to_string()),
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,10}",
    ]
}

/// Strategy for generating claims that pass every validation rule
pub fn valid_claim_strategy() -> impl Strategy<Value = Claim> {
    (
        claimant_name_strategy(),
        positive_amount_strategy(),
        claim_type_strategy(),
        0i64..365i64,
    )
        .prop_map(|(name, amount, claim_type, day)| {
            TestClaimBuilder::new()
                .with_claimant_name(name)
                .with_amount(amount)
                .with_type(claim_type)
                .with_created_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day))
                .build()
        })
}

/// Strategy for generating claims with any field possibly missing or invalid
pub fn arbitrary_claim_strategy() -> impl Strategy<Value = Claim> {
    (
        proptest::option::of(prop_oneof![claimant_name_strategy(), Just(String::new()), Just("   ".to_string())]),
        proptest::option::of(any_amount_strategy()),
        proptest::option::of(claim_type_strategy()),
    )
        .prop_map(|(name, amount, claim_type)| {
            let mut claim = TestClaimBuilder::new().build();
            claim.claimant_name = name;
            claim.claim_amount = amount;
            claim.claim_type = claim_type;
            claim
        })
}

/// Strategy for generating a stored corpus of up to `max_len` claims
///
/// Every claim carries an id, as claims read back from a store do.
pub fn corpus_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    vec(arbitrary_claim_strategy(), 0..=max_len).prop_map(|claims| {
        claims
            .into_iter()
            .map(|mut claim| {
                claim.id = Some(ClaimId::new());
                claim
            })
            .collect()
    })
}

/// Strategy for generating a corpus whose amounts are all identical
pub fn uniform_corpus_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    (positive_amount_strategy(), corpus_strategy(max_len)).prop_map(|(amount, mut corpus)| {
        for claim in &mut corpus {
            claim.claim_amount = Some(amount);
        }
        corpus
    })
}
