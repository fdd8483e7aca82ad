//! Fraud Proof Verifier Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::adjudicate::adjudicate;
use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        optimistic_verifier: msg
            .optimistic_verifier
            .map(|a| deps.api.addr_validate(&a))
            .transpose()?,
        bridge_validator: msg
            .bridge_validator
            .map(|a| deps.api.addr_validate(&a))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetOptimisticVerifier { address } => {
            set_address(deps, info, "set_optimistic_verifier", address, |c| {
                &mut c.optimistic_verifier
            })
        }
        ExecuteMsg::SetBridgeValidator { address } => {
            set_address(deps, info, "set_bridge_validator", address, |c| {
                &mut c.bridge_validator
            })
        }
    }
}

/// Admin-only wiring update; the same address again is a no-op.
fn set_address(
    deps: DepsMut,
    info: MessageInfo,
    method: &str,
    address: String,
    slot: impl FnOnce(&mut Config) -> &mut Option<Addr>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let address = deps.api.addr_validate(&address)?;
    let current = slot(&mut config);
    let result = if current.as_ref() == Some(&address) {
        "noop"
    } else {
        *current = Some(address.clone());
        CONFIG.save(deps.storage, &config)?;
        "updated"
    };

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("address", address)
        .add_attribute("result", result))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                optimistic_verifier: config.optimistic_verifier,
                bridge_validator: config.bridge_validator,
            })
        }
        QueryMsg::VerifyFraudProof { claim_id, proof } => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&adjudicate(deps, &config, claim_id, &proof)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
