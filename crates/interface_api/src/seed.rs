//! Startup seeding of the in-memory claim store

use std::path::Path;

use thiserror::Error;

use domain_claims::Claim;

use crate::dto::ClaimPayload;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON array of claims in the request payload format
pub fn parse_seed(json: &str) -> Result<Vec<Claim>, SeedError> {
    let payloads: Vec<ClaimPayload> = serde_json::from_str(json)?;
    Ok(payloads.into_iter().map(ClaimPayload::into_claim).collect())
}

/// Reads and parses a seed file
pub fn read_seed_file(path: &Path) -> Result<Vec<Claim>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&json)
}
