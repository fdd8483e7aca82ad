//! Rate Limiter Contract
//!
//! Bounds how much of each token can leave the bridge per transaction and
//! per fixed time window. Only authorized callers (the bridge) may consume
//! capacity; anyone may ask whether an amount would fit.

pub mod contract;
pub mod error;
pub mod limit;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
