//! Claim assessment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use core_kernel::ClaimId;
use domain_claims::{FraudAssessment, RoutingDecision, ValidationResult};

use crate::dto::ClaimPayload;
use crate::error::ApiError;
use crate::AppState;

fn parse_claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Malformed claim id: {}", raw)))
}

/// Validates a submitted claim
pub async fn validate_claim(
    State(state): State<AppState>,
    Json(payload): Json<ClaimPayload>,
) -> Json<ValidationResult> {
    let claim = payload.into_claim();
    Json(state.service.validate(&claim))
}

/// Scores a submitted claim against the stored corpus
///
/// A body carrying an id is treated as a stored claim: the score is saved
/// under that id.
pub async fn score_claim(
    State(state): State<AppState>,
    Json(payload): Json<ClaimPayload>,
) -> Result<Json<FraudAssessment>, ApiError> {
    let mut claim = payload.into_claim();
    let assessment = state.service.score(&mut claim).await?;

    info!(
        claim_id = ?claim.id,
        score = %assessment.fraud_score,
        tier = %assessment.risk_tier,
        "Claim scored"
    );
    Ok(Json(assessment))
}

/// Routes a stored claim
pub async fn route_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoutingDecision>, ApiError> {
    let id = parse_claim_id(&id)?;
    let decision = state.service.route(id).await?;
    Ok(Json(decision))
}

/// Renders the plain-text summary of a stored claim
pub async fn summarize_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = parse_claim_id(&id)?;
    Ok(state.service.summarize(id).await?)
}
