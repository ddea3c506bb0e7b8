//! Claims Domain Ports
//!
//! The assessment pipeline does not own claim storage. It talks to the
//! store through [`ClaimStore`], which the hosting application provides:
//!
//! - **In-memory adapter**: [`crate::adapters::InMemoryClaimStore`]
//! - **Database or external adapter**: supplied by the host
//!
//! ```rust,ignore
//! let store: Arc<dyn ClaimStore> = Arc::new(InMemoryClaimStore::new());
//! let service = ClaimAssessmentService::new(store, hints, &config);
//! ```

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::Claim;

/// Storage collaborator for claims
///
/// `get_all` doubles as the historical corpus for fraud scoring and is read
/// in full on every scoring call.
#[async_trait]
pub trait ClaimStore: DomainPort + HealthCheckable {
    /// Looks up a claim; `Ok(None)` when the id is unknown
    async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Returns every recorded claim
    async fn get_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Inserts or replaces a claim, assigning an id when it has none
    async fn save(&self, claim: Claim) -> Result<Claim, PortError>;
}

/// Test doubles for the claim store
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::HealthCheckResult;

    /// Store whose every call fails, for exercising error propagation
    #[derive(Debug, Default)]
    pub struct UnavailableClaimStore;

    impl DomainPort for UnavailableClaimStore {}

    #[async_trait]
    impl HealthCheckable for UnavailableClaimStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::unhealthy("unavailable-claim-store", "always down")
        }
    }

    #[async_trait]
    impl ClaimStore for UnavailableClaimStore {
        async fn get_by_id(&self, _id: ClaimId) -> Result<Option<Claim>, PortError> {
            Err(PortError::unavailable("claim-store"))
        }

        async fn get_all(&self) -> Result<Vec<Claim>, PortError> {
            Err(PortError::unavailable("claim-store"))
        }

        async fn save(&self, _claim: Claim) -> Result<Claim, PortError> {
            Err(PortError::unavailable("claim-store"))
        }
    }
}
