//! Integration tests for the assessment HTTP endpoints

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use core_kernel::ClaimId;
use domain_claims::{
    AssessmentConfig, Claim, ClaimAssessmentService, ClaimStore, HeuristicHintProvider,
    UnavailableClaimStore,
};
use interface_api::{config::ApiConfig, create_router};

use test_utils::{init_test_tracing, seeded_store, ClaimFixtures, CorpusFixtures, TestClaimBuilder};

/// Test helper: app over a store seeded with `corpus`
fn setup_app(corpus: Vec<Claim>, config: AssessmentConfig) -> (Router, Arc<dyn ClaimStore>) {
    init_test_tracing();
    let store: Arc<dyn ClaimStore> = seeded_store(corpus);
    let service = ClaimAssessmentService::new(
        store.clone(),
        Arc::new(HeuristicHintProvider::new()),
        &config,
    );
    (create_router(Arc::new(service), ApiConfig::default()), store)
}

fn default_app() -> Router {
    setup_app(Vec::new(), AssessmentConfig::default()).0
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = default_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_readiness_with_memory_store() {
    let response = default_app().oneshot(get("/health/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_readiness_with_unavailable_store() {
    let service = ClaimAssessmentService::new(
        Arc::new(UnavailableClaimStore),
        Arc::new(HeuristicHintProvider::new()),
        &AssessmentConfig::default(),
    );
    let app = create_router(Arc::new(service), ApiConfig::default());

    let response = app.oneshot(get("/health/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "unavailable");
}

// =============================================================================
// Validation Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_validate_valid_claim() {
    let request = post_json(
        "/claims/validate",
        json!({"claimant_name": "John Doe", "claim_amount": "1000.00", "claim_type": "AUTO"}),
    );
    let response = default_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["reasons"], json!([]));
    assert_eq!(body["hints"], json!([]));
}

#[tokio::test]
async fn test_validate_unknown_type() {
    let request = post_json(
        "/claims/validate",
        json!({"claimant_name": "John Doe", "claim_amount": 1000, "claim_type": "INVALID"}),
    );
    let response = default_app().oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["reasons"],
        json!(["Claim type must be one of: [AUTO, HEALTH, PROPERTY, LIFE]"])
    );
}

#[tokio::test]
async fn test_validate_with_validation_disabled() {
    let config = AssessmentConfig { validation_enabled: false, ..Default::default() };
    let (app, _) = setup_app(Vec::new(), config);

    let request = post_json(
        "/claims/validate",
        json!({"claimant_name": "", "claim_amount": -100, "claim_type": "INVALID"}),
    );
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({"valid": true, "reasons": [], "hints": []}));
}

// =============================================================================
// Scoring Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_score_against_empty_store() {
    let request = post_json(
        "/claims/score",
        json!({"claimant_name": "John Doe", "claim_amount": "1000.00", "claim_type": "AUTO"}),
    );
    let response = default_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["fraud_score"], "0.10");
    assert_eq!(body["risk_tier"], "LOW");
}

#[tokio::test]
async fn test_score_unknown_type_is_not_rejected() {
    let request = post_json(
        "/claims/score",
        json!({"claimant_name": "John Doe", "claim_amount": 1000, "claim_type": "BOAT"}),
    );
    let response = default_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["fraud_score"], "0.10");
}

#[tokio::test]
async fn test_score_persists_for_stored_claim() {
    let stored = ClaimFixtures::persisted_auto();
    let id = stored.id.unwrap();
    let mut corpus = CorpusFixtures::repeat_claimant();
    corpus.push(stored);
    let (app, store) = setup_app(corpus, AssessmentConfig::default());

    let request = post_json(
        "/claims/score",
        json!({
            "id": id.to_string(),
            "claimant_name": "John Doe",
            "claim_amount": "1000.00",
            "claim_type": "AUTO"
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["fraud_score"], "0.27");
    let reloaded = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(reloaded.fraud_score, Some(dec!(0.27)));
}

#[tokio::test]
async fn test_score_store_failure_is_internal_error() {
    let service = ClaimAssessmentService::new(
        Arc::new(UnavailableClaimStore),
        Arc::new(HeuristicHintProvider::new()),
        &AssessmentConfig::default(),
    );
    let app = create_router(Arc::new(service), ApiConfig::default());

    let request = post_json("/claims/score", json!({"claimant_name": "John Doe"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Summary and Routing Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_summary_is_plain_text() {
    let claim = ClaimFixtures::persisted_auto();
    let id = claim.id.unwrap();
    let (app, _) = setup_app(vec![claim], AssessmentConfig::default());

    let response = app.oneshot(get(&format!("/claims/{}/summary", id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let text = extract_text(response.into_body()).await;
    assert!(text.starts_with("CLAIM SUMMARY\n"));
    assert!(text.contains(&format!("ID: {}\n", id)));
    assert!(text.contains("Fraud Score: 0.10/1.00\n"));
}

#[tokio::test]
async fn test_summary_unknown_id_is_404() {
    let response = default_app()
        .oneshot(get(&format!("/claims/{}/summary", ClaimId::new())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let response = default_app().oneshot(get("/claims/not-an-id/route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_route_stored_claim() {
    let claim = TestClaimBuilder::new().with_id(ClaimId::new()).build();
    let id = claim.id.unwrap();
    let (app, _) = setup_app(vec![claim], AssessmentConfig::default());

    let response = app.oneshot(get(&format!("/claims/CLM-{}/route", id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["queue"], "AUTO");
    assert!(body["reason"].as_str().unwrap().contains("low fraud risk"));
}

#[tokio::test]
async fn test_route_high_risk_claim_to_manual_review() {
    let suspicious = TestClaimBuilder::new()
        .with_id(ClaimId::new())
        .with_amount(dec!(250000))
        .with_type(domain_claims::ClaimType::Life)
        .build();
    let id = suspicious.id.unwrap();
    let mut corpus = CorpusFixtures::repeat_claimant();
    corpus.extend(CorpusFixtures::repeat_claimant());
    corpus.push(suspicious);
    let (app, _) = setup_app(corpus, AssessmentConfig::default());

    let response = app.oneshot(get(&format!("/claims/{}/route", id))).await.unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["queue"], "MANUAL_REVIEW");
    assert!(body["reason"].as_str().unwrap().starts_with("High fraud risk detected"));
}
