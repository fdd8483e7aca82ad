use cosmwasm_std::{StdError, Timestamp, Uint128};
use thiserror::Error;

use common::claim::InvalidTransition;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized caller: {caller}")]
    UnauthorizedCaller { caller: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("Fraud proof verifier not set")]
    FraudProofVerifierNotSet,

    // ========================================================================
    // Claim State Errors
    // ========================================================================
    #[error("Claim {claim_id} not found")]
    ClaimNotFound { claim_id: u64 },

    #[error("Invalid state for claim {claim_id}: {transition}")]
    InvalidClaimState {
        claim_id: u64,
        transition: InvalidTransition,
    },

    #[error("Claim {claim_id} is not finalized")]
    ClaimNotFinalized { claim_id: u64 },

    #[error("Claim {claim_id} already settled")]
    ClaimAlreadySettled { claim_id: u64 },

    #[error("Invalid payload hash: {reason}")]
    InvalidPayloadHash { reason: String },

    // ========================================================================
    // Timing Errors
    // ========================================================================
    #[error("Challenge window for claim {claim_id} closed at {deadline}")]
    ChallengeWindowClosed { claim_id: u64, deadline: Timestamp },

    #[error("Challenge window for claim {claim_id} open until {deadline}")]
    ChallengeWindowOpen { claim_id: u64, deadline: Timestamp },

    // ========================================================================
    // Bond Errors
    // ========================================================================
    #[error("Insufficient bond: required {required} {denom}, provided {provided}")]
    InsufficientBond {
        required: Uint128,
        provided: Uint128,
        denom: String,
    },
}
