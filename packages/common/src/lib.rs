//! Common - Shared Types and Utilities for the Bridge Security Contracts
//!
//! This package provides the type definitions and hashing helpers shared by
//! the validator, guardian, rate limiter, fraud proof verifier, optimistic
//! verifier and bridge contracts.

pub mod asset;
pub mod claim;
pub mod fraud;
pub mod hash;
pub mod payload;

pub use asset::{Asset, AssetInfo};
pub use claim::{ClaimQueryMsg, ClaimResponse, ClaimState};
pub use fraud::{FraudProof, FraudVerdict, FraudVerdictResponse};
pub use hash::{bytes32_to_hex, keccak256, parse_bytes32};
pub use payload::WithdrawPayload;
