//! Routing decisions
//!
//! Combines a validation result and a fraud assessment into the queue a
//! claim should be dispatched to. Rules apply in order, first match wins:
//!
//! 1. Routing disabled -> `MANUAL_REVIEW`
//! 2. Validation failed -> `MANUAL_REVIEW`
//! 3. Score >= 0.70 -> `MANUAL_REVIEW`
//! 4. Otherwise -> the claim type's own queue

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::claim::{Claim, ClaimType};
use crate::fraud::{FraudAssessment, RiskTier};
use crate::validation::ValidationResult;

pub const ROUTING_DISABLED_REASON: &str = "Routing service is disabled";

/// Destination queue for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingQueue {
    Auto,
    Health,
    Property,
    Life,
    ManualReview,
}

impl From<ClaimType> for RoutingQueue {
    fn from(claim_type: ClaimType) -> Self {
        match claim_type {
            ClaimType::Auto => RoutingQueue::Auto,
            ClaimType::Health => RoutingQueue::Health,
            ClaimType::Property => RoutingQueue::Property,
            ClaimType::Life => RoutingQueue::Life,
        }
    }
}

impl fmt::Display for RoutingQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoutingQueue::Auto => "AUTO",
            RoutingQueue::Health => "HEALTH",
            RoutingQueue::Property => "PROPERTY",
            RoutingQueue::Life => "LIFE",
            RoutingQueue::ManualReview => "MANUAL_REVIEW",
        })
    }
}

/// Where a claim goes and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub queue: RoutingQueue,
    pub reason: String,
}

impl RoutingDecision {
    fn manual_review(reason: impl Into<String>) -> Self {
        Self {
            queue: RoutingQueue::ManualReview,
            reason: reason.into(),
        }
    }

    pub fn is_manual_review(&self) -> bool {
        self.queue == RoutingQueue::ManualReview
    }
}

/// Decides the routing queue for an assessed claim
#[derive(Debug, Clone)]
pub struct RoutingEngine {
    enabled: bool,
}

impl RoutingEngine {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Routes a claim given its precomputed validation and fraud results
    pub fn route(
        &self,
        claim: &Claim,
        validation: &ValidationResult,
        fraud: &FraudAssessment,
    ) -> RoutingDecision {
        let decision = self.decide(claim, validation, fraud);
        debug!(
            claim_id = ?claim.id,
            queue = %decision.queue,
            score = %fraud.fraud_score,
            "Routing decided"
        );
        decision
    }

    fn decide(
        &self,
        claim: &Claim,
        validation: &ValidationResult,
        fraud: &FraudAssessment,
    ) -> RoutingDecision {
        if !self.enabled {
            return RoutingDecision::manual_review(ROUTING_DISABLED_REASON);
        }

        if !validation.valid {
            return RoutingDecision::manual_review(format!(
                "Claim failed validation: {}",
                validation.reasons.join(", ")
            ));
        }

        let score = fraud.fraud_score;
        let risk = RiskTier::from_score(score);
        if risk == RiskTier::High {
            return RoutingDecision::manual_review(format!(
                "High fraud risk detected (score: {})",
                score
            ));
        }

        // A disabled validator can pass a claim without a type
        let Some(claim_type) = claim.claim_type else {
            return RoutingDecision::manual_review("Claim type is missing");
        };

        let qualifier = match risk {
            RiskTier::Medium => "medium",
            _ => "low",
        };

        RoutingDecision {
            queue: claim_type.into(),
            reason: format!(
                "Standard processing for {} claim with {} fraud risk (score: {})",
                claim_type, qualifier, score
            ),
        }
    }
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::new()
    }
}
