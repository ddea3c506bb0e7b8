//! Request handlers

pub mod assessment;
pub mod health;
