//! Error types for the validator contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Invalid signer set: {reason}")]
    InvalidSignerSet { reason: String },

    #[error("Invalid threshold {threshold} for {signers} signers")]
    InvalidThreshold { threshold: u32, signers: u32 },
}
