//! Error types for the bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("Unauthorized: {sender} is not the guardian contract")]
    NotGuardian { sender: String },

    // ========================================================================
    // Admin Errors
    // ========================================================================

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    #[error("Asset recovery only available when paused")]
    RecoveryNotAvailable,

    #[error("Invalid fee: {bps} bps exceeds max {max_bps} bps")]
    InvalidFee { bps: u64, max_bps: u64 },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Transfer already processed: {payload_hash}")]
    AlreadyProcessed { payload_hash: String },

    #[error("Claim {claim_id} is already pending for this payload")]
    ClaimAlreadyPending { claim_id: u64 },

    #[error("Claim {claim_id} is not finalized")]
    ClaimNotFinalized { claim_id: u64 },

    #[error("No pending release for claim {claim_id}")]
    UnknownClaim { claim_id: u64 },

    #[error("Claim {claim_id} does not commit to the recorded payload")]
    ClaimPayloadMismatch { claim_id: u64 },

    // ========================================================================
    // Verification Errors
    // ========================================================================

    #[error("Invalid attestation: {reason}")]
    InvalidAttestation { reason: String },

    #[error("Rate limit exceeded: {reason}")]
    RateLimitExceeded { reason: String },

    // ========================================================================
    // Amount / Payload Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Insufficient bond: required {required} {denom}, provided {provided}")]
    InsufficientBond {
        required: Uint128,
        provided: Uint128,
        denom: String,
    },

    #[error("Insufficient liquidity for {token}: locked {locked}, requested {requested}")]
    InsufficientLiquidity {
        token: String,
        locked: Uint128,
        requested: Uint128,
    },
}
