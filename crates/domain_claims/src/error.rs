//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, PortError};

/// Errors that can occur in the claims domain
///
/// Business-rule failures are never errors; they are reported through
/// `ValidationResult`. What remains is the not-found signal for id lookups
/// and failures of the claim store itself.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found with id: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Unknown claim type: {0}")]
    InvalidClaimType(String),

    #[error("Claim store error: {0}")]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Returns true for the lookup miss the transport maps to 404
    pub fn is_not_found(&self) -> bool {
        match self {
            ClaimError::ClaimNotFound(_) => true,
            ClaimError::Store(err) => err.is_not_found(),
            ClaimError::InvalidClaimType(_) => false,
        }
    }
}
