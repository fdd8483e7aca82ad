//! Validator Contract - Threshold Attestation over a Signer Set
//!
//! Holds an ordered set of EVM-style signer addresses and a threshold, and
//! answers whether a 32-byte message hash carries signatures from at least
//! `threshold` distinct members.
//!
//! Verification is exposed as a query so that the bridge and the fraud proof
//! verifier can consult it without mutating anything. Signature recovery sits
//! behind [`attestation::SignerRecovery`].

pub mod attestation;
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::attestation::{verify_attestation, ApiRecovery, SignerRecovery};
pub use crate::error::ContractError;
