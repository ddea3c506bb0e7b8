//! Claims Assessment Domain
//!
//! This crate assesses a submitted insurance claim through rule validation,
//! statistical fraud scoring, routing, and summarisation.
//!
//! # Pipeline
//!
//! ```text
//! Claim ──────────> ValidationEngine ───> ValidationResult ─┐
//! Claim + corpus ─> FraudScoringEngine ─> FraudAssessment ──┼─> RoutingEngine ───> RoutingDecision
//!                                                           └─> SummaryGenerator ─> report text
//! ```
//!
//! The engines are pure and synchronous. [`ClaimAssessmentService`] reads
//! the corpus from the [`ClaimStore`] port and writes fraud scores back onto
//! persisted claims.

pub mod claim;
pub mod hints;
pub mod validation;
pub mod fraud;
pub mod routing;
pub mod summary;
pub mod ports;
pub mod adapters;
pub mod services;
pub mod config;
pub mod error;

pub use claim::{Claim, ClaimStatus, ClaimType};
pub use hints::{HintProvider, HeuristicHintProvider};
#[cfg(any(test, feature = "mock"))]
pub use hints::StaticHintProvider;
pub use validation::{ValidationEngine, ValidationResult};
pub use fraud::{CorpusPolicy, FraudAssessment, FraudScoringEngine, FraudSignals, RiskTier};
pub use routing::{RoutingDecision, RoutingEngine, RoutingQueue};
pub use summary::SummaryGenerator;
pub use ports::ClaimStore;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::UnavailableClaimStore;
pub use adapters::InMemoryClaimStore;
pub use services::ClaimAssessmentService;
pub use config::AssessmentConfig;
pub use error::ClaimError;
