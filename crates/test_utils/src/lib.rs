//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims assessment test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and corpora for the common scenarios
//! - `builders`: Builder patterns for test claim construction
//! - `store`: Seeded claim stores, service wiring, and test tracing
//! - `assertions`: Custom assertion helpers for assessment results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use assertions::*;
pub use generators::*;
