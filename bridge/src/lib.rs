//! Bridge Contract
//!
//! Entry point of the security stack. Deposits lock assets for transfer to
//! another chain. Withdrawals release locked assets either immediately, when
//! the validator accepts a signer attestation, or after an optimistic claim
//! finalizes. Every release passes the rate limiter and the guardian-driven
//! pause flag.

pub mod contract;
pub mod error;
pub mod execute;
pub mod fee_manager;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
