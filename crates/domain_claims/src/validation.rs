//! Claim validation rules
//!
//! # Rules
//!
//! Every rule is evaluated, so a claim can fail several at once. Reasons
//! are reported in rule order:
//! 1. Claimant name must be present and not blank
//! 2. Claim amount must be present and strictly positive
//! 3. Claim type must be present and one of the known types
//!
//! Hints from the configured [`HintProvider`] are attached only when the
//! provider is enabled and never influence validity.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::claim::{Claim, ClaimType};
use crate::hints::HintProvider;

pub const BLANK_NAME_REASON: &str = "Claimant name cannot be blank";
pub const NON_POSITIVE_AMOUNT_REASON: &str = "Claim amount must be greater than 0";

/// Outcome of validating a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `reasons` is empty
    pub valid: bool,
    /// Failure reasons in rule order
    pub reasons: Vec<String>,
    /// Advisory hints
    pub hints: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result with no hints
    pub fn ok() -> Self {
        Self {
            valid: true,
            reasons: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Records a failed rule
    pub fn add_reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
        self.valid = false;
    }

    /// Attaches advisory hints
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }
}

/// Failure message listing every valid type in declaration order
pub fn invalid_type_reason() -> String {
    let codes: Vec<&str> = ClaimType::ALL.iter().map(ClaimType::code).collect();
    format!("Claim type must be one of: [{}]", codes.join(", "))
}

/// Applies the structural rules to a claim
pub struct ValidationEngine {
    hints: Arc<dyn HintProvider>,
    enabled: bool,
}

impl ValidationEngine {
    /// Creates an enabled engine backed by the given hint provider
    pub fn new(hints: Arc<dyn HintProvider>) -> Self {
        Self { hints, enabled: true }
    }

    /// Turns the engine on or off; a disabled engine accepts everything
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Validates a claim
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let engine = ValidationEngine::new(Arc::new(HeuristicHintProvider::new()));
    /// let result = engine.validate(&claim);
    /// if !result.valid {
    ///     println!("rejected: {}", result.reasons.join(", "));
    /// }
    /// ```
    pub fn validate(&self, claim: &Claim) -> ValidationResult {
        if !self.enabled {
            return ValidationResult::ok();
        }

        let mut result = ValidationResult::ok();

        let name_present = claim
            .claimant_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !name_present {
            result.add_reason(BLANK_NAME_REASON);
        }

        if !claim.claim_amount.is_some_and(|amount| amount > Decimal::ZERO) {
            result.add_reason(NON_POSITIVE_AMOUNT_REASON);
        }

        if claim.claim_type.is_none() {
            result.add_reason(invalid_type_reason());
        }

        let hints = if self.hints.is_enabled() {
            self.hints.hints(claim)
        } else {
            Vec::new()
        };

        debug!(
            claim_id = ?claim.id,
            valid = result.valid,
            reasons = result.reasons.len(),
            hints = hints.len(),
            "Claim validated"
        );

        result.with_hints(hints)
    }
}
