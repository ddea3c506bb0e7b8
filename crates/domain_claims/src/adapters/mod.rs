//! Claim store adapters

pub mod memory;

pub use memory::InMemoryClaimStore;
