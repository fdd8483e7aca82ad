//! Admin wiring and parameter updates.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Config, AUTHORIZED_CALLERS, CONFIG};

fn load_config_as_admin(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

/// Bond economics must leave the reward payable out of a losing bond.
pub fn validate_params(
    challenge_period: u64,
    challenge_bond: Uint128,
    challenger_reward: Uint128,
) -> Result<(), ContractError> {
    if challenge_period == 0 {
        return Err(ContractError::InvalidParams {
            reason: "challenge_period must be positive".to_string(),
        });
    }
    if challenge_bond.is_zero() {
        return Err(ContractError::InvalidParams {
            reason: "challenge_bond must be positive".to_string(),
        });
    }
    if challenger_reward > challenge_bond {
        return Err(ContractError::InvalidParams {
            reason: format!(
                "challenger_reward {} exceeds challenge_bond {}",
                challenger_reward, challenge_bond
            ),
        });
    }
    Ok(())
}

pub fn execute_set_fraud_proof_verifier(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = load_config_as_admin(deps.storage, &info)?;
    let verifier = deps.api.addr_validate(&address)?;

    let result = if config.fraud_proof_verifier.as_ref() == Some(&verifier) {
        "noop"
    } else {
        config.fraud_proof_verifier = Some(verifier.clone());
        CONFIG.save(deps.storage, &config)?;
        "updated"
    };

    Ok(Response::new()
        .add_attribute("method", "set_fraud_proof_verifier")
        .add_attribute("address", verifier)
        .add_attribute("result", result))
}

pub fn execute_set_authorized_caller(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    load_config_as_admin(deps.storage, &info)?;
    let caller = deps.api.addr_validate(&caller)?;

    let current = AUTHORIZED_CALLERS
        .may_load(deps.storage, &caller)?
        .unwrap_or(false);
    let result = if current == authorized {
        "noop"
    } else {
        if authorized {
            AUTHORIZED_CALLERS.save(deps.storage, &caller, &true)?;
        } else {
            AUTHORIZED_CALLERS.remove(deps.storage, &caller);
        }
        "updated"
    };

    Ok(Response::new()
        .add_attribute("method", "set_authorized_caller")
        .add_attribute("caller", caller)
        .add_attribute("authorized", authorized.to_string())
        .add_attribute("result", result))
}

pub fn execute_update_params(
    deps: DepsMut,
    info: MessageInfo,
    challenge_period: Option<u64>,
    challenge_bond: Option<Uint128>,
    challenger_reward: Option<Uint128>,
    treasury: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = load_config_as_admin(deps.storage, &info)?;

    if let Some(period) = challenge_period {
        config.challenge_period = period;
    }
    if let Some(bond) = challenge_bond {
        config.challenge_bond = bond;
    }
    if let Some(reward) = challenger_reward {
        config.challenger_reward = reward;
    }
    if let Some(treasury) = treasury {
        config.treasury = deps.api.addr_validate(&treasury)?;
    }
    validate_params(
        config.challenge_period,
        config.challenge_bond,
        config.challenger_reward,
    )?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_params")
        .add_attribute("challenge_period", config.challenge_period.to_string())
        .add_attribute("challenge_bond", config.challenge_bond.to_string())
        .add_attribute("challenger_reward", config.challenger_reward.to_string())
        .add_attribute("treasury", config.treasury))
}
