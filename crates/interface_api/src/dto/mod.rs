//! Request and response data transfer objects

pub mod assessment;

pub use assessment::{ClaimPayload, HealthResponse};
