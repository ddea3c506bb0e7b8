//! Store Test Utilities
//!
//! Provides seeded in-memory claim stores, assessment service wiring, and a
//! process-wide tracing subscriber for tests.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

use domain_claims::{
    AssessmentConfig, Claim, ClaimAssessmentService, ClaimStore, HeuristicHintProvider,
    HintProvider, InMemoryClaimStore, StaticHintProvider,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_env("TEST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    // Another harness may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs the test tracing subscriber once per process
///
/// Output is off unless `TEST_LOG` holds a filter such as `debug`.
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

/// Creates a store holding `claims`, assigning ids where missing
pub fn seeded_store(claims: impl IntoIterator<Item = Claim>) -> Arc<InMemoryClaimStore> {
    Arc::new(InMemoryClaimStore::with_claims(claims))
}

/// A service and the store behind it
pub struct TestHarness {
    pub store: Arc<InMemoryClaimStore>,
    pub service: ClaimAssessmentService,
}

impl TestHarness {
    /// Default configuration, heuristic hints, and an empty store
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::default()
    }

    /// Reads a claim back from the store
    pub async fn stored(&self, claim: &Claim) -> Option<Claim> {
        let id = claim.id?;
        self.store.get_by_id(id).await.ok().flatten()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TestHarness`]
pub struct TestHarnessBuilder {
    corpus: Vec<Claim>,
    config: AssessmentConfig,
    hints: Arc<dyn HintProvider>,
}

impl Default for TestHarnessBuilder {
    fn default() -> Self {
        Self {
            corpus: Vec::new(),
            config: AssessmentConfig::default(),
            hints: Arc::new(HeuristicHintProvider::new()),
        }
    }
}

impl TestHarnessBuilder {
    pub fn with_corpus(mut self, corpus: impl IntoIterator<Item = Claim>) -> Self {
        self.corpus.extend(corpus);
        self
    }

    pub fn with_config(mut self, config: AssessmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the heuristic provider with fixed hints
    pub fn with_static_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = Arc::new(StaticHintProvider::new(hints));
        self
    }

    pub fn build(self) -> TestHarness {
        init_test_tracing();
        let store = seeded_store(self.corpus);
        let service = ClaimAssessmentService::new(store.clone(), self.hints, &self.config);
        TestHarness { store, service }
    }
}
