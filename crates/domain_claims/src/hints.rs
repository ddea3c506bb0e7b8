//! Advisory hints for claim reviewers
//!
//! Hints are free-text suggestions attached to a validation result. They
//! never affect whether a claim is valid. Providers are pluggable so a
//! model-backed generator can replace the heuristics without touching the
//! validation rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::claim::{Claim, ClaimType};

pub const HIGH_AMOUNT_HINT: &str = "High claim amount detected - consider additional documentation";
pub const TEST_NAME_HINT: &str = "Test claimant name detected - verify authenticity";
pub const LIFE_CLAIM_HINT: &str = "Life insurance claim requires death certificate verification";
pub const SINGLE_NAME_HINT: &str = "Single name provided - consider requesting full legal name";

/// Amounts strictly above this trigger the documentation hint
pub const HIGH_AMOUNT_THRESHOLD: Decimal = dec!(10000);

/// Source of advisory hints for a claim
pub trait HintProvider: Send + Sync {
    /// Whether the provider should be consulted at all
    fn is_enabled(&self) -> bool;

    /// Produces hints in a stable order; duplicates are allowed
    fn hints(&self, claim: &Claim) -> Vec<String>;
}

/// Rule-of-thumb hint generator
///
/// Each heuristic is evaluated independently and appends at most one hint,
/// in this order: high amount, test-like name, life claim, single name.
#[derive(Debug, Clone)]
pub struct HeuristicHintProvider {
    enabled: bool,
}

impl HeuristicHintProvider {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A provider that reports itself disabled and is never consulted
    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HeuristicHintProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HintProvider for HeuristicHintProvider {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn hints(&self, claim: &Claim) -> Vec<String> {
        let mut hints = Vec::new();
        let name = claim.claimant_name.as_deref().unwrap_or("");

        if claim.claim_amount.is_some_and(|amount| amount > HIGH_AMOUNT_THRESHOLD) {
            hints.push(HIGH_AMOUNT_HINT.to_string());
        }

        if name.to_lowercase().contains("test") {
            hints.push(TEST_NAME_HINT.to_string());
        }

        if claim.claim_type == Some(ClaimType::Life) {
            hints.push(LIFE_CLAIM_HINT.to_string());
        }

        if name.split_whitespace().count() < 2 {
            hints.push(SINGLE_NAME_HINT.to_string());
        }

        hints
    }
}

/// Hint provider returning a fixed response, for tests
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct StaticHintProvider {
    enabled: bool,
    hints: Vec<String>,
}

#[cfg(any(test, feature = "mock"))]
impl StaticHintProvider {
    /// An enabled provider that always answers with `hints`
    pub fn new<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            hints: hints.into_iter().map(Into::into).collect(),
        }
    }

    /// An enabled provider with nothing to say
    pub fn silent() -> Self {
        Self { enabled: true, hints: Vec::new() }
    }

    /// A disabled provider; its canned hints must never surface
    pub fn disabled<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { enabled: false, ..Self::new(hints) }
    }
}

#[cfg(any(test, feature = "mock"))]
impl HintProvider for StaticHintProvider {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn hints(&self, _claim: &Claim) -> Vec<String> {
        self.hints.clone()
    }
}
