//! Claim assessment orchestration
//!
//! The engines are pure. This service supplies them with what they need
//! from the claim store and performs the one write the pipeline makes:
//! storing the fraud score on a claim that already has an id.
//!
//! The read-score-write sequence is not atomic. Concurrent scoring of the
//! same claim races and the last write wins.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::ClaimId;

use crate::claim::Claim;
use crate::config::AssessmentConfig;
use crate::error::ClaimError;
use crate::fraud::{FraudAssessment, FraudScoringEngine};
use crate::hints::HintProvider;
use crate::ports::ClaimStore;
use crate::routing::{RoutingDecision, RoutingEngine};
use crate::summary::{SummaryGenerator, SUMMARIZATION_DISABLED};
use crate::validation::{ValidationEngine, ValidationResult};

/// Runs the validation, scoring, routing and summary pipeline
pub struct ClaimAssessmentService {
    store: Arc<dyn ClaimStore>,
    validation: ValidationEngine,
    scoring: FraudScoringEngine,
    routing: RoutingEngine,
    summary: SummaryGenerator,
}

impl ClaimAssessmentService {
    /// Builds the engines from configuration
    pub fn new(
        store: Arc<dyn ClaimStore>,
        hints: Arc<dyn HintProvider>,
        config: &AssessmentConfig,
    ) -> Self {
        Self {
            store,
            validation: ValidationEngine::new(hints).with_enabled(config.validation_enabled),
            scoring: FraudScoringEngine::new()
                .with_enabled(config.scoring_enabled)
                .with_corpus_policy(config.corpus_policy),
            routing: RoutingEngine::new().with_enabled(config.routing_enabled),
            summary: SummaryGenerator::new().with_enabled(config.summarization_enabled),
        }
    }

    /// The underlying claim store
    pub fn store(&self) -> &Arc<dyn ClaimStore> {
        &self.store
    }

    /// Resolves a claim id, failing with `ClaimNotFound` when unknown
    pub async fn find_claim(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        match self.store.get_by_id(id).await? {
            Some(claim) => Ok(claim),
            None => {
                warn!(claim_id = %id, "Claim not found");
                Err(ClaimError::ClaimNotFound(id))
            }
        }
    }

    /// Validates a claim
    pub fn validate(&self, claim: &Claim) -> ValidationResult {
        self.validation.validate(claim)
    }

    /// Scores a claim against the full stored corpus
    ///
    /// When scoring is enabled and the claim has an id, the score is
    /// written onto `claim` and saved. Calling this twice for the same
    /// persisted claim is therefore not idempotent with respect to the
    /// store.
    pub async fn score(&self, claim: &mut Claim) -> Result<FraudAssessment, ClaimError> {
        if !self.scoring.is_enabled() {
            return Ok(FraudAssessment::disabled());
        }

        let corpus = self.store.get_all().await?;
        let assessment = self.scoring.score(claim, &corpus);

        if let Some(id) = claim.id {
            claim.fraud_score = Some(assessment.fraud_score);
            *claim = self.store.save(claim.clone()).await?;
            info!(
                claim_id = %id,
                score = %assessment.fraud_score,
                tier = %assessment.risk_tier,
                "Fraud score recorded"
            );
        }

        Ok(assessment)
    }

    /// Routes a stored claim
    pub async fn route(&self, id: ClaimId) -> Result<RoutingDecision, ClaimError> {
        let claim = self.find_claim(id).await?;
        self.route_claim(claim).await
    }

    /// Routes an already-resolved claim
    pub async fn route_claim(&self, mut claim: Claim) -> Result<RoutingDecision, ClaimError> {
        if !self.routing.is_enabled() {
            // No validation or scoring, so nothing is persisted
            return Ok(self.routing.route(&claim, &ValidationResult::ok(), &FraudAssessment::disabled()));
        }

        let validation = self.validation.validate(&claim);
        let fraud = self.score(&mut claim).await?;
        let decision = self.routing.route(&claim, &validation, &fraud);

        info!(
            claim_id = ?claim.id,
            queue = %decision.queue,
            "Claim routed"
        );
        Ok(decision)
    }

    /// Summarises a stored claim
    pub async fn summarize(&self, id: ClaimId) -> Result<String, ClaimError> {
        let claim = self.find_claim(id).await?;
        self.summarize_claim(claim).await
    }

    /// Summarises an already-resolved claim
    pub async fn summarize_claim(&self, mut claim: Claim) -> Result<String, ClaimError> {
        if !self.summary.is_enabled() {
            return Ok(SUMMARIZATION_DISABLED.to_string());
        }

        let validation = self.validation.validate(&claim);
        let fraud = self.score(&mut claim).await?;
        Ok(self.summary.summarize(&claim, &validation, &fraud))
    }
}
