use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized caller: {caller}")]
    UnauthorizedCaller { caller: String },

    #[error("Invalid rate limit: {reason}")]
    InvalidParams { reason: String },

    #[error("Rate limit exceeded: {limit_type} limit {limit}, requested {requested}")]
    RateLimitExceeded {
        limit_type: String,
        limit: Uint128,
        requested: Uint128,
    },
}
