//! Execute handlers for the bridge contract.
//!
//! - `deposit` - Deposit and Receive handlers for outgoing transfers
//! - `withdraw` - fast-path Withdraw, slow-path claim submission, ReleaseClaim
//! - `admin` - guardian pause, admin transfer, fees and recovery

mod admin;
mod deposit;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use withdraw::*;

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, Storage, Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::state::{Config, LOCKED_BALANCES};
use rate_limiter::msg::{
    CanConsumeResponse, ExecuteMsg as RateLimiterExecuteMsg, QueryMsg as RateLimiterQueryMsg,
};

pub(crate) fn ensure_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    Ok(())
}

/// Ask the rate limiter whether `amount` of `token` fits right now.
pub(crate) fn check_capacity(
    querier: &QuerierWrapper,
    rate_limiter: &Addr,
    token: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let res: CanConsumeResponse = querier.query_wasm_smart(
        rate_limiter,
        &RateLimiterQueryMsg::CanConsume {
            token: token.to_string(),
            amount,
        },
    )?;
    if !res.allowed {
        return Err(ContractError::RateLimitExceeded {
            reason: res.reason.unwrap_or_else(|| "capacity unavailable".to_string()),
        });
    }
    Ok(())
}

pub(crate) fn consume_msg(
    rate_limiter: &Addr,
    token: &str,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: rate_limiter.to_string(),
        msg: to_json_binary(&RateLimiterExecuteMsg::Consume {
            token: token.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

pub(crate) fn lock(
    storage: &mut dyn Storage,
    token: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let current = LOCKED_BALANCES
        .may_load(storage, token.to_string())?
        .unwrap_or_default();
    LOCKED_BALANCES.save(storage, token.to_string(), &(current + amount))?;
    Ok(())
}

pub(crate) fn unlock(
    storage: &mut dyn Storage,
    token: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let locked = LOCKED_BALANCES
        .may_load(storage, token.to_string())?
        .unwrap_or_default();
    if locked < amount {
        return Err(ContractError::InsufficientLiquidity {
            token: token.to_string(),
            locked,
            requested: amount,
        });
    }
    LOCKED_BALANCES.save(storage, token.to_string(), &(locked - amount))?;
    Ok(())
}
