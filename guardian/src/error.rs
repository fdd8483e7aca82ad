use cosmwasm_std::StdError;
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

    #[error("Not a guardian: {address}")]
    NotGuardian { address: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid guardian set: {reason}")]
    InvalidGuardianSet { reason: String },

    #[error("Invalid threshold {threshold} for {guardians} guardians")]
    InvalidThreshold { threshold: u32, guardians: u32 },

    #[error("Bridge target not set")]
    BridgeTargetNotSet,
}
