//! Custom Test Assertions
//!
//! Provides assertion helpers for assessment results that give more
//! meaningful failure messages than plain `assert!`.

use rust_decimal::Decimal;

use domain_claims::{FraudAssessment, RiskTier, RoutingDecision, RoutingQueue, ValidationResult};

/// Asserts that a fraud score lies in `[0, 1]` with exactly two decimal places
pub fn assert_score_well_formed(score: Decimal) {
    assert!(
        score >= Decimal::ZERO && score <= Decimal::ONE,
        "Fraud score out of range: {}",
        score
    );
    assert_eq!(score.scale(), 2, "Fraud score must carry two decimal places, got {}", score);
}

/// Asserts that the assessment's tier and explanation agree with its score
pub fn assert_assessment_consistent(assessment: &FraudAssessment) {
    assert_score_well_formed(assessment.fraud_score);
    let expected = RiskTier::from_score(assessment.fraud_score);
    assert_eq!(
        assessment.risk_tier, expected,
        "Tier {} does not match score {}",
        assessment.risk_tier, assessment.fraud_score
    );
    assert_eq!(assessment.explanation, expected.explanation());
}

/// Asserts that a validation result is valid with no reasons
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.valid && result.reasons.is_empty(),
        "Expected a valid result, got reasons: {:?}",
        result.reasons
    );
}

/// Asserts that a validation result is invalid and carries the given reason
pub fn assert_invalid_with(result: &ValidationResult, reason: &str) {
    assert!(!result.valid, "Expected an invalid result");
    assert!(
        result.reasons.iter().any(|r| r == reason),
        "Expected reason {:?} in {:?}",
        reason,
        result.reasons
    );
}

/// Asserts that `valid` agrees with the reason list
pub fn assert_validation_consistent(result: &ValidationResult) {
    assert_eq!(
        result.valid,
        result.reasons.is_empty(),
        "valid={} but reasons={:?}",
        result.valid,
        result.reasons
    );
}

/// Asserts a routing decision's queue and that its reason contains `fragment`
pub fn assert_routed_to(decision: &RoutingDecision, queue: RoutingQueue, fragment: &str) {
    assert_eq!(decision.queue, queue, "Unexpected queue, reason was {:?}", decision.reason);
    assert!(
        decision.reason.contains(fragment),
        "Reason {:?} does not contain {:?}",
        decision.reason,
        fragment
    );
}
