//! Engine-level tests for domain_claims

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::ClaimId;

use domain_claims::fraud::{FraudSignals, LOW_RISK_EXPLANATION};
use domain_claims::hints::{HIGH_AMOUNT_HINT, LIFE_CLAIM_HINT, SINGLE_NAME_HINT, TEST_NAME_HINT};
use domain_claims::validation::{invalid_type_reason, BLANK_NAME_REASON, NON_POSITIVE_AMOUNT_REASON};
use domain_claims::{
    ClaimType, CorpusPolicy, FraudAssessment, FraudScoringEngine, HeuristicHintProvider, RiskTier,
    RoutingEngine, RoutingQueue, StaticHintProvider, SummaryGenerator, ValidationEngine,
    ValidationResult,
};

use test_utils::{
    arbitrary_claim_strategy, assert_assessment_consistent, assert_invalid_with,
    assert_routed_to, assert_score_well_formed, assert_valid, assert_validation_consistent,
    corpus_strategy, uniform_corpus_strategy, valid_claim_strategy, ClaimFixtures,
    CorpusFixtures, NameFixtures, TemporalFixtures, TestClaimBuilder,
};

fn validator() -> ValidationEngine {
    ValidationEngine::new(Arc::new(HeuristicHintProvider::new()))
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_first_claim_is_low_risk_and_routed_to_its_queue() {
        let claim = ClaimFixtures::john_doe_auto();

        let validation = validator().validate(&claim);
        let fraud = FraudScoringEngine::new().score(&claim, &[]);
        let decision = RoutingEngine::new().route(&claim, &validation, &fraud);

        assert_valid(&validation);
        assert_eq!(fraud.fraud_score, dec!(0.10));
        assert_eq!(fraud.risk_tier, RiskTier::Low);
        assert_eq!(fraud.explanation, LOW_RISK_EXPLANATION);
        assert_routed_to(&decision, RoutingQueue::Auto, "low fraud risk");
    }

    #[test]
    fn test_outlier_amount_raises_score() {
        let claim = TestClaimBuilder::new().with_amount(dec!(50000)).build();
        let fraud = FraudScoringEngine::new().score(&claim, &CorpusFixtures::modest_mixed());

        assert!(fraud.fraud_score > dec!(0.30), "score was {}", fraud.fraud_score);
        assert_eq!(fraud.fraud_score, dec!(0.40));
        assert_eq!(fraud.risk_tier, RiskTier::Medium);
    }

    #[test]
    fn test_repeat_claimant_raises_score() {
        let claim = ClaimFixtures::john_doe_auto();
        let fraud = FraudScoringEngine::new().score(&claim, &CorpusFixtures::repeat_claimant());

        assert!(fraud.fraud_score > dec!(0.20), "score was {}", fraud.fraud_score);
        assert_eq!(fraud.fraud_score, dec!(0.27));
    }

    #[test]
    fn test_disabled_validation_accepts_anything() {
        let claim = TestClaimBuilder::new()
            .with_claimant_name("")
            .with_amount(dec!(-100))
            .without_type()
            .build();
        let engine = ValidationEngine::new(Arc::new(HeuristicHintProvider::new())).with_enabled(false);

        let result = engine.validate(&claim);

        assert!(result.valid);
        assert!(result.reasons.is_empty());
        assert!(result.hints.is_empty());
    }

    #[test]
    fn test_unknown_type_lists_valid_types_once() {
        let claim = TestClaimBuilder::new().without_type().build();
        let result = validator().validate(&claim);

        assert!(!result.valid);
        assert_eq!(
            result.reasons,
            vec!["Claim type must be one of: [AUTO, HEALTH, PROPERTY, LIFE]".to_string()]
        );
        assert_eq!(result.reasons[0], invalid_type_reason());
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_reasons_follow_rule_order() {
        let result = validator().validate(&ClaimFixtures::empty());

        assert_eq!(
            result.reasons,
            vec![
                BLANK_NAME_REASON.to_string(),
                NON_POSITIVE_AMOUNT_REASON.to_string(),
                invalid_type_reason(),
            ]
        );
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let claim = TestClaimBuilder::new().with_claimant_name("   \t").build();
        assert_invalid_with(&validator().validate(&claim), BLANK_NAME_REASON);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let claim = TestClaimBuilder::new().with_amount(dec!(0.00)).build();
        assert_invalid_with(&validator().validate(&claim), NON_POSITIVE_AMOUNT_REASON);
    }

    #[test]
    fn test_smallest_positive_amount_accepted() {
        let claim = TestClaimBuilder::new().with_amount(dec!(0.01)).build();
        assert_valid(&validator().validate(&claim));
    }

    #[test]
    fn test_heuristic_hints_in_order() {
        let claim = TestClaimBuilder::new()
            .with_claimant_name("Tester")
            .with_amount(dec!(10000.01))
            .with_type(ClaimType::Life)
            .build();

        let result = validator().validate(&claim);

        assert_valid(&result);
        assert_eq!(
            result.hints,
            vec![HIGH_AMOUNT_HINT, TEST_NAME_HINT, LIFE_CLAIM_HINT, SINGLE_NAME_HINT]
        );
    }

    #[test]
    fn test_amount_at_threshold_gives_no_hint() {
        let claim = TestClaimBuilder::new().with_amount(dec!(10000)).build();
        assert!(validator().validate(&claim).hints.is_empty());
    }

    #[test]
    fn test_hints_do_not_affect_validity() {
        let engine = ValidationEngine::new(Arc::new(StaticHintProvider::new(["check this"])));

        let valid = engine.validate(&ClaimFixtures::john_doe_auto());
        assert_valid(&valid);
        assert_eq!(valid.hints, vec!["check this"]);

        let invalid = engine.validate(&ClaimFixtures::invalid_name_and_amount());
        assert!(!invalid.valid);
        assert_eq!(invalid.reasons.len(), 2);
    }

    #[test]
    fn test_test_like_name_gets_hint() {
        let claim = TestClaimBuilder::new()
            .with_claimant_name(NameFixtures::test_claimant())
            .build();

        let result = validator().validate(&claim);

        assert_valid(&result);
        assert_eq!(result.hints, vec![TEST_NAME_HINT]);
    }

    #[test]
    fn test_profile_fields_do_not_change_assessment() {
        let plain = ClaimFixtures::john_doe_auto();
        let profiled = TestClaimBuilder::new().with_profile("John", "Doe").build();
        assert_eq!(profiled.first_name.as_deref(), Some("John"));
        assert_eq!(profiled.date_of_birth, Some(TemporalFixtures::date_of_birth()));

        assert_eq!(validator().validate(&profiled), validator().validate(&plain));
        let corpus = CorpusFixtures::repeat_claimant();
        let engine = FraudScoringEngine::new();
        assert_eq!(engine.score(&profiled, &corpus), engine.score(&plain, &corpus));
    }

    #[test]
    fn test_disabled_provider_is_not_consulted() {
        let engine = ValidationEngine::new(Arc::new(StaticHintProvider::disabled(["never shown"])));
        assert!(engine.validate(&ClaimFixtures::john_doe_auto()).hints.is_empty());
    }
}

// ============================================================================
// Fraud Scoring Tests
// ============================================================================

mod fraud_tests {
    use super::*;

    #[test]
    fn test_single_entry_corpus_has_no_amount_signal() {
        let corpus = CorpusFixtures::uniform_amounts(dec!(500), 1);
        let claim = TestClaimBuilder::new().with_amount(dec!(999999)).build();

        let refs: Vec<_> = corpus.iter().collect();
        let signals = FraudSignals::measure(&claim, &refs);
        assert_eq!(signals.amount_anomaly, 0.0);

        assert_assessment_consistent(&FraudScoringEngine::new().score(&claim, &corpus));
    }

    #[test]
    fn test_missing_fields_score_without_error() {
        let claim = ClaimFixtures::empty();
        let assessment = FraudScoringEngine::new().score(&claim, &CorpusFixtures::modest_mixed());

        // Only the missing type contributes: rarity 1.0 at weight 0.3
        assert_eq!(assessment.fraud_score, dec!(0.30));
        assert_assessment_consistent(&assessment);
    }

    #[test]
    fn test_name_match_ignores_case() {
        let mut corpus = CorpusFixtures::uniform_amounts(dec!(100), 4);
        for claim in &mut corpus {
            claim.claimant_name = Some("JOHN DOE".to_string());
        }
        let claim = TestClaimBuilder::new().with_amount(dec!(100)).build();

        let refs: Vec<_> = corpus.iter().collect();
        let signals = FraudSignals::measure(&claim, &refs);
        assert!((signals.name_repeat - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_exclude_self_ignores_stored_copy() {
        let claim = TestClaimBuilder::new().with_id(ClaimId::new()).build();
        let corpus = vec![claim.clone()];

        let excluded = FraudScoringEngine::new().score(&claim, &corpus);
        assert_eq!(excluded, FraudAssessment::cold_start());

        let included = FraudScoringEngine::new()
            .with_corpus_policy(CorpusPolicy::IncludeAll)
            .score(&claim, &corpus);
        // Same type in a corpus of one: no rarity, no repeat, no variance
        assert_eq!(included.fraud_score, dec!(0.00));
    }

    #[test]
    fn test_random_corpus_scores_stay_in_range() {
        let corpus = CorpusFixtures::random(50);
        let engine = FraudScoringEngine::new();
        for claim in &corpus {
            assert_assessment_consistent(&engine.score(claim, &corpus));
        }
    }

    #[test]
    fn test_disabled_engine_response() {
        let assessment = FraudScoringEngine::new()
            .with_enabled(false)
            .score(&ClaimFixtures::john_doe_auto(), &CorpusFixtures::modest_mixed());

        assert_eq!(assessment.fraud_score, dec!(0.00));
        assert_eq!(assessment.risk_tier, RiskTier::Low);
        assert_eq!(assessment.explanation, "Fraud scoring is disabled");
    }
}

// ============================================================================
// Routing Tests
// ============================================================================

mod routing_tests {
    use super::*;

    fn route_with_score(score: rust_decimal::Decimal) -> domain_claims::RoutingDecision {
        RoutingEngine::new().route(
            &ClaimFixtures::john_doe_auto(),
            &ValidationResult::ok(),
            &FraudAssessment::from_score(score),
        )
    }

    #[test]
    fn test_score_at_high_threshold_goes_to_manual_review() {
        assert_routed_to(
            &route_with_score(dec!(0.70)),
            RoutingQueue::ManualReview,
            "High fraud risk detected (score: 0.70)",
        );
    }

    #[test]
    fn test_score_below_high_threshold_goes_to_type_queue() {
        assert_routed_to(&route_with_score(dec!(0.69)), RoutingQueue::Auto, "medium fraud risk");
        assert_routed_to(&route_with_score(dec!(0.40)), RoutingQueue::Auto, "medium fraud risk");
        assert_routed_to(&route_with_score(dec!(0.39)), RoutingQueue::Auto, "low fraud risk");
    }

    #[test]
    fn test_invalid_claim_lists_reasons() {
        let claim = ClaimFixtures::invalid_name_and_amount();
        let validation = validator().validate(&claim);
        let decision = RoutingEngine::new().route(&claim, &validation, &FraudAssessment::cold_start());

        assert_eq!(decision.queue, RoutingQueue::ManualReview);
        assert_eq!(
            decision.reason,
            format!("Claim failed validation: {}, {}", BLANK_NAME_REASON, NON_POSITIVE_AMOUNT_REASON)
        );
    }

    #[test]
    fn test_each_type_has_its_queue() {
        for claim_type in ClaimType::ALL {
            let claim = TestClaimBuilder::new().with_type(claim_type).build();
            let decision = RoutingEngine::new().route(
                &claim,
                &ValidationResult::ok(),
                &FraudAssessment::cold_start(),
            );
            assert_eq!(decision.queue, RoutingQueue::from(claim_type));
            assert_eq!(decision.queue.to_string(), claim_type.code());
        }
    }

    #[test]
    fn test_disabled_routing_always_manual() {
        let decision = RoutingEngine::new().with_enabled(false).route(
            &ClaimFixtures::john_doe_auto(),
            &ValidationResult::ok(),
            &FraudAssessment::cold_start(),
        );
        assert!(decision.is_manual_review());
    }
}

// ============================================================================
// Summary Tests
// ============================================================================

mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_reflects_assessment() {
        let claim = TestClaimBuilder::new()
            .with_claimant_name("Test")
            .with_amount(dec!(25000))
            .build();
        let validation = validator().validate(&claim);
        let fraud = FraudAssessment::from_score(dec!(0.72));

        let summary = SummaryGenerator::new().summarize(&claim, &validation, &fraud);

        assert!(summary.starts_with("CLAIM SUMMARY\n"));
        assert!(summary.contains("Claimant: Test\n"));
        assert!(summary.contains("Amount: $25,000.00\n"));
        assert!(summary.contains("VALIDATION STATUS: VALID\n"));
        let recommendations = format!(
            "AI Recommendations:\n- {}\n- {}\n- {}\n",
            HIGH_AMOUNT_HINT, TEST_NAME_HINT, SINGLE_NAME_HINT
        );
        assert!(summary.contains(&recommendations));
        assert!(summary.contains("FRAUD RISK: HIGH\n"));
        assert!(summary.contains("Fraud Score: 0.72/1.00\n"));
        assert!(!summary.contains("Validation Issues:"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_score_is_well_formed(claim in arbitrary_claim_strategy(), corpus in corpus_strategy(20)) {
        let assessment = FraudScoringEngine::new().score(&claim, &corpus);
        assert_score_well_formed(assessment.fraud_score);
        prop_assert_eq!(assessment.risk_tier, RiskTier::from_score(assessment.fraud_score));
    }

    #[test]
    fn prop_uniform_amounts_carry_no_anomaly(claim in valid_claim_strategy(), corpus in uniform_corpus_strategy(10)) {
        let refs: Vec<_> = corpus.iter().collect();
        prop_assume!(!refs.is_empty());
        prop_assert_eq!(FraudSignals::measure(&claim, &refs).amount_anomaly, 0.0);
    }

    #[test]
    fn prop_valid_claims_pass_whatever_the_hints(claim in valid_claim_strategy()) {
        let heuristic = validator().validate(&claim);
        let fixed = ValidationEngine::new(Arc::new(StaticHintProvider::new(["a", "b"]))).validate(&claim);
        prop_assert!(heuristic.valid);
        prop_assert!(fixed.valid);
        prop_assert!(fixed.reasons.is_empty());
    }

    #[test]
    fn prop_valid_flag_matches_reasons(claim in arbitrary_claim_strategy()) {
        assert_validation_consistent(&validator().validate(&claim));
    }

    #[test]
    fn prop_stored_copy_does_not_shift_score(claim in valid_claim_strategy(), corpus in corpus_strategy(15)) {
        let claim = claim_with_id(claim);
        let mut with_self = corpus.clone();
        with_self.push(claim.clone());

        let engine = FraudScoringEngine::new();
        prop_assert_eq!(engine.score(&claim, &with_self), engine.score(&claim, &corpus));
    }
}

fn claim_with_id(mut claim: domain_claims::Claim) -> domain_claims::Claim {
    claim.id = Some(ClaimId::new());
    claim
}
