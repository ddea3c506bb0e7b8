//! Assessment pipeline configuration

use serde::{Deserialize, Serialize};

use crate::fraud::CorpusPolicy;

/// Feature toggles for the assessment engines
///
/// Every toggle defaults to on. A disabled engine answers with its fixed
/// bypass response rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    pub validation_enabled: bool,
    pub scoring_enabled: bool,
    pub routing_enabled: bool,
    pub summarization_enabled: bool,
    /// Whether the scored claim's own stored copy counts as history
    pub corpus_policy: CorpusPolicy,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            validation_enabled: true,
            scoring_enabled: true,
            routing_enabled: true,
            summarization_enabled: true,
            corpus_policy: CorpusPolicy::ExcludeSelf,
        }
    }
}
