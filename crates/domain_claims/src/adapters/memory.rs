//! In-memory claim store
//!
//! Keeps claims in a map behind an async `RwLock`. Used by the API server
//! and by tests; nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::claim::Claim;
use crate::ports::ClaimStore;

/// Claim store backed by a `HashMap`
#[derive(Debug, Default, Clone)]
pub struct InMemoryClaimStore {
    claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with claims, assigning ids where missing
    pub fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let map = claims
            .into_iter()
            .map(|mut claim| {
                let id = *claim.id.get_or_insert_with(ClaimId::new_v7);
                (id, claim)
            })
            .collect();
        Self {
            claims: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored claims
    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-claim-store")
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.claims.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims: Vec<Claim> = self.claims.read().await.values().cloned().collect();
        claims.sort_by_key(|c| c.created_at);
        Ok(claims)
    }

    async fn save(&self, mut claim: Claim) -> Result<Claim, PortError> {
        let id = *claim.id.get_or_insert_with(ClaimId::new_v7);
        self.claims.write().await.insert(id, claim.clone());
        debug!(claim_id = %id, "Claim saved");
        Ok(claim)
    }
}
