//! Core Kernel - Foundational types for the claims assessment system
//!
//! This crate provides the building blocks shared by the domain and
//! transport crates:
//! - Strongly-typed claim identifiers
//! - Money with precise decimal arithmetic and currency formatting
//! - Port infrastructure for hexagonal adapters

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency};
pub use identifiers::ClaimId;
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
