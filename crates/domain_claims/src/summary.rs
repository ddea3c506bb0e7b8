//! Plain-text claim summaries

use crate::claim::Claim;
use crate::fraud::FraudAssessment;
use crate::validation::ValidationResult;

pub const SUMMARIZATION_DISABLED: &str = "Claim summarization is disabled";

const NONE: &str = "(none)";

/// Renders a claim and its assessment results as a fixed-layout report
#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    enabled: bool,
}

impl SummaryGenerator {
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

    /// Produces the report; deterministic for identical inputs
    pub fn summarize(
        &self,
        claim: &Claim,
        validation: &ValidationResult,
        fraud: &FraudAssessment,
    ) -> String {
        if !self.enabled {
            return SUMMARIZATION_DISABLED.to_string();
        }

        let mut lines = vec![
            "CLAIM SUMMARY".to_string(),
            "=============".to_string(),
            format!(
                "ID: {}",
                claim.id.map(|id| id.to_string()).unwrap_or_else(|| "unassigned".to_string())
            ),
            format!("Claimant: {}", claim.claimant_name.as_deref().unwrap_or(NONE)),
            format!(
                "Amount: {}",
                claim
                    .amount_money()
                    .map(|m| m.to_currency_string())
                    .unwrap_or_else(|| NONE.to_string())
            ),
            format!(
                "Type: {}",
                claim.claim_type.map(|t| t.to_string()).unwrap_or_else(|| NONE.to_string())
            ),
            format!("Status: {}", claim.status),
            format!("Created: {}", claim.created_at.format("%Y-%m-%dT%H:%M:%S%.f")),
            String::new(),
            format!(
                "VALIDATION STATUS: {}",
                if validation.valid { "VALID" } else { "INVALID" }
            ),
        ];

        if !validation.reasons.is_empty() {
            lines.push("Validation Issues:".to_string());
            lines.extend(validation.reasons.iter().map(|r| format!("- {}", r)));
        }

        if !validation.hints.is_empty() {
            lines.push("AI Recommendations:".to_string());
            lines.extend(validation.hints.iter().map(|h| format!("- {}", h)));
        }

        lines.push(String::new());
        lines.push(format!("FRAUD RISK: {}", fraud.risk_tier));
        lines.push(format!("Fraud Score: {}/1.00", fraud.fraud_score));
        lines.push(format!("Risk Analysis: {}", fraud.explanation));

        let mut summary = lines.join("\n");
        summary.push('\n');
        summary
    }
}

impl Default for SummaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
