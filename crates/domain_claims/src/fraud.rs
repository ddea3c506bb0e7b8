//! Statistical fraud scoring
//!
//! A claim is compared against the corpus of previously recorded claims
//! using three signals, each in `[0, 1]`:
//!
//! | Signal | Weight | Definition |
//! |---|---|---|
//! | amount anomaly | 0.4 | `min(1, |z| / 3)` with z the amount's z-score in the corpus |
//! | type rarity | 0.3 | `max(0, 1 - 2 * frequency(type))` |
//! | name repeat | 0.3 | `min(1, 0.2 * (matches - 1))`, 0 when matches <= 1 |
//!
//! The weighted sum is clamped to `[0, 1]` and rounded half-up to two
//! decimal places. An empty corpus yields the cold-start score 0.10.
//!
//! Scoring here is pure. Writing the score back onto a persisted claim is
//! done by `ClaimAssessmentService::score`.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::claim::Claim;

/// Score assigned when there is no history to compare against
pub const COLD_START_SCORE: Decimal = dec!(0.10);
/// Scores at or above this are HIGH risk and go to manual review
pub const HIGH_RISK_THRESHOLD: Decimal = dec!(0.70);
/// Scores at or above this (and below HIGH) are MEDIUM risk
pub const MEDIUM_RISK_THRESHOLD: Decimal = dec!(0.40);

const AMOUNT_WEIGHT: f64 = 0.4;
const TYPE_WEIGHT: f64 = 0.3;
const NAME_WEIGHT: f64 = 0.3;
const Z_SCORE_CEILING: f64 = 3.0;
const NAME_REPEAT_STEP: f64 = 0.2;

pub const HIGH_RISK_EXPLANATION: &str =
    "High fraud risk detected based on anomalous patterns in amount, claim type frequency, or repeated claimant";
pub const MEDIUM_RISK_EXPLANATION: &str =
    "Medium fraud risk - some unusual patterns detected that warrant additional review";
pub const LOW_RISK_EXPLANATION: &str =
    "Low fraud risk - claim appears consistent with historical patterns";
pub const SCORING_DISABLED_EXPLANATION: &str = "Fraud scoring is disabled";

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classifies a score: HIGH >= 0.70, MEDIUM >= 0.40, LOW otherwise
    pub fn from_score(score: Decimal) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Canned explanation for the tier
    pub fn explanation(&self) -> &'static str {
        match self {
            RiskTier::High => HIGH_RISK_EXPLANATION,
            RiskTier::Medium => MEDIUM_RISK_EXPLANATION,
            RiskTier::Low => LOW_RISK_EXPLANATION,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        })
    }
}

/// Result of scoring a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Score in `[0.00, 1.00]`, always scale 2; serialises as e.g. `"0.25"`
    pub fraud_score: Decimal,
    /// Tier derived from the score
    pub risk_tier: RiskTier,
    /// Human-readable explanation
    pub explanation: String,
}

impl FraudAssessment {
    /// Builds an assessment from a score, deriving tier and explanation
    pub fn from_score(score: Decimal) -> Self {
        let fraud_score = to_score_scale(score);
        let risk_tier = RiskTier::from_score(fraud_score);
        Self {
            fraud_score,
            risk_tier,
            explanation: risk_tier.explanation().to_string(),
        }
    }

    /// The fixed response when there is no history
    pub fn cold_start() -> Self {
        Self::from_score(COLD_START_SCORE)
    }

    /// The fixed response when scoring is switched off
    pub fn disabled() -> Self {
        Self {
            fraud_score: to_score_scale(Decimal::ZERO),
            risk_tier: RiskTier::Low,
            explanation: SCORING_DISABLED_EXPLANATION.to_string(),
        }
    }
}

/// Which corpus entries take part in the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusPolicy {
    /// Drop corpus entries sharing the scored claim's id
    #[default]
    ExcludeSelf,
    /// Use the corpus exactly as the store returned it
    IncludeAll,
}

/// The three raw signals behind a composite score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FraudSignals {
    pub amount_anomaly: f64,
    pub type_rarity: f64,
    pub name_repeat: f64,
}

impl FraudSignals {
    /// Measures a claim against a non-empty corpus
    pub fn measure(claim: &Claim, corpus: &[&Claim]) -> Self {
        Self {
            amount_anomaly: amount_anomaly(claim, corpus),
            type_rarity: type_rarity(claim, corpus),
            name_repeat: name_repeat(claim, corpus),
        }
    }

    /// Weighted sum clamped to `[0, 1]`, before rounding
    pub fn composite(&self) -> f64 {
        let raw = AMOUNT_WEIGHT * self.amount_anomaly
            + TYPE_WEIGHT * self.type_rarity
            + NAME_WEIGHT * self.name_repeat;
        raw.clamp(0.0, 1.0)
    }
}

/// Rounds a raw composite half-up to two decimal places
pub fn round_score(raw: f64) -> Decimal {
    let value = Decimal::from_f64(raw).unwrap_or(Decimal::ZERO);
    to_score_scale(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn to_score_scale(score: Decimal) -> Decimal {
    let mut score = score
        .max(Decimal::ZERO)
        .min(Decimal::ONE)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    score.rescale(2);
    score
}

/// How far the claim amount sits from the corpus mean, scaled to `[0, 1]`
fn amount_anomaly(claim: &Claim, corpus: &[&Claim]) -> f64 {
    let Some(amount) = claim.claim_amount.and_then(|a| a.to_f64()) else {
        return 0.0;
    };

    let amounts: Vec<f64> = corpus
        .iter()
        .filter_map(|c| c.claim_amount.and_then(|a| a.to_f64()))
        .collect();
    if amounts.is_empty() {
        return 0.0;
    }

    // A corpus with a single distinct amount carries no anomaly signal.
    // Checked exactly, since the float mean of equal values can drift.
    if amounts.iter().all(|a| *a == amounts[0]) {
        return 0.0;
    }

    let n = amounts.len() as f64;
    let mean = amounts.iter().sum::<f64>() / n;
    let variance = amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 || !std_dev.is_finite() {
        return 0.0;
    }

    let z = (amount - mean) / std_dev;
    (z.abs() / Z_SCORE_CEILING).min(1.0)
}

/// Rare types score high, common ones approach zero
fn type_rarity(claim: &Claim, corpus: &[&Claim]) -> f64 {
    let same_type = match claim.claim_type {
        Some(claim_type) => corpus
            .iter()
            .filter(|c| c.claim_type == Some(claim_type))
            .count(),
        None => 0,
    };
    let frequency = same_type as f64 / corpus.len() as f64;
    (1.0 - frequency * 2.0).max(0.0)
}

/// Repeat claimants score 0.2 per earlier claim beyond the first
fn name_repeat(claim: &Claim, corpus: &[&Claim]) -> f64 {
    let matches = corpus.iter().filter(|c| c.same_claimant(claim)).count();
    if matches <= 1 {
        return 0.0;
    }
    ((matches - 1) as f64 * NAME_REPEAT_STEP).min(1.0)
}

/// Computes composite fraud scores against a historical corpus
#[derive(Debug, Clone)]
pub struct FraudScoringEngine {
    enabled: bool,
    corpus_policy: CorpusPolicy,
}

impl FraudScoringEngine {
    /// Creates an enabled engine with the default corpus policy
    pub fn new() -> Self {
        Self {
            enabled: true,
            corpus_policy: CorpusPolicy::default(),
        }
    }

    /// Turns scoring on or off
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets which corpus entries take part in the statistics
    pub fn with_corpus_policy(mut self, policy: CorpusPolicy) -> Self {
        self.corpus_policy = policy;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn corpus_policy(&self) -> CorpusPolicy {
        self.corpus_policy
    }

    /// Scores a claim against the corpus
    ///
    /// Never fails: an empty corpus gives the cold-start score, a
    /// zero-variance corpus contributes no amount signal, and a disabled
    /// engine returns a fixed 0.00 / LOW assessment.
    pub fn score(&self, claim: &Claim, corpus: &[Claim]) -> FraudAssessment {
        if !self.enabled {
            return FraudAssessment::disabled();
        }

        let reference = self.reference_corpus(claim, corpus);
        if reference.is_empty() {
            debug!(claim_id = ?claim.id, "Empty corpus, using cold-start score");
            return FraudAssessment::cold_start();
        }

        let signals = FraudSignals::measure(claim, &reference);
        let assessment = FraudAssessment::from_score(round_score(signals.composite()));

        debug!(
            claim_id = ?claim.id,
            corpus_size = reference.len(),
            amount_anomaly = signals.amount_anomaly,
            type_rarity = signals.type_rarity,
            name_repeat = signals.name_repeat,
            score = %assessment.fraud_score,
            tier = %assessment.risk_tier,
            "Fraud score computed"
        );

        assessment
    }

    fn reference_corpus<'a>(&self, claim: &Claim, corpus: &'a [Claim]) -> Vec<&'a Claim> {
        match (self.corpus_policy, claim.id) {
            (CorpusPolicy::ExcludeSelf, Some(id)) => {
                corpus.iter().filter(|c| c.id != Some(id)).collect()
            }
            _ => corpus.iter().collect(),
        }
    }
}

impl Default for FraudScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
