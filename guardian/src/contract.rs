//! Guardian Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Storage, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, GuardiansResponse, HasVotedResponse, InstantiateMsg, MigrateMsg,
    PauseAction, PauseStateResponse, QueryMsg, TargetExecuteMsg,
};
use crate::state::{
    Config, PauseState, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MIN_GUARDIANS, PAUSE_STATE, VOTES,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;

    if msg.guardians.len() < MIN_GUARDIANS {
        return Err(ContractError::InvalidGuardianSet {
            reason: format!(
                "at least {} guardians required, got {}",
                MIN_GUARDIANS,
                msg.guardians.len()
            ),
        });
    }

    let mut guardians: Vec<Addr> = Vec::with_capacity(msg.guardians.len());
    for guardian in &msg.guardians {
        let addr = deps.api.addr_validate(guardian)?;
        if guardians.contains(&addr) {
            return Err(ContractError::InvalidGuardianSet {
                reason: format!("duplicate guardian {}", addr),
            });
        }
        guardians.push(addr);
    }

    if msg.threshold == 0 || msg.threshold as usize > guardians.len() {
        return Err(ContractError::InvalidThreshold {
            threshold: msg.threshold,
            guardians: guardians.len() as u32,
        });
    }

    let bridge_target = msg
        .bridge_target
        .map(|t| deps.api.addr_validate(&t))
        .transpose()?;

    let config = Config {
        admin: admin.clone(),
        guardians,
        threshold: msg.threshold,
        bridge_target,
    };
    CONFIG.save(deps.storage, &config)?;
    PAUSE_STATE.save(
        deps.storage,
        &PauseState {
            paused: false,
            round: 0,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("guardian_count", config.guardians.len().to_string())
        .add_attribute("threshold", config.threshold.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Vote { action } => execute_vote(deps, info, action),
        ExecuteMsg::RevokeVote {} => execute_revoke_vote(deps, info),
        ExecuteMsg::SetBridgeTarget { address } => execute_set_bridge_target(deps, info, address),
    }
}

fn count_votes(storage: &dyn Storage, round: u64) -> StdResult<u32> {
    let count = VOTES
        .prefix(round)
        .keys(storage, None, None, Order::Ascending)
        .count();
    Ok(count as u32)
}

pub fn execute_vote(
    deps: DepsMut,
    info: MessageInfo,
    action: PauseAction,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.is_guardian(&info.sender) {
        return Err(ContractError::NotGuardian {
            address: info.sender.to_string(),
        });
    }
    let target = config
        .bridge_target
        .clone()
        .ok_or(ContractError::BridgeTargetNotSet)?;

    let mut state = PAUSE_STATE.load(deps.storage)?;
    let wants_paused = matches!(action, PauseAction::Pause);

    // Outcome already in effect
    if state.paused == wants_paused {
        return Ok(Response::new()
            .add_attribute("action", "vote")
            .add_attribute("vote", action.as_str())
            .add_attribute("result", "noop"));
    }

    if VOTES.has(deps.storage, (state.round, &info.sender)) {
        return Ok(Response::new()
            .add_attribute("action", "vote")
            .add_attribute("vote", action.as_str())
            .add_attribute("guardian", info.sender)
            .add_attribute("result", "noop"));
    }

    VOTES.save(deps.storage, (state.round, &info.sender), &true)?;
    let votes = count_votes(deps.storage, state.round)?;

    let response = Response::new()
        .add_attribute("action", "vote")
        .add_attribute("vote", action.as_str())
        .add_attribute("guardian", info.sender)
        .add_attribute("round", state.round.to_string())
        .add_attribute("votes", votes.to_string())
        .add_attribute("threshold", config.threshold.to_string());

    if votes < config.threshold {
        return Ok(response.add_attribute("result", "recorded"));
    }

    // Threshold reached: flip, advance the round, then notify the target
    state.paused = wants_paused;
    state.round += 1;
    PAUSE_STATE.save(deps.storage, &state)?;

    let target_msg = if wants_paused {
        TargetExecuteMsg::Pause {}
    } else {
        TargetExecuteMsg::Unpause {}
    };

    Ok(response
        .add_message(WasmMsg::Execute {
            contract_addr: target.to_string(),
            msg: to_json_binary(&target_msg)?,
            funds: vec![],
        })
        .add_attribute("result", "executed")
        .add_attribute("paused", state.paused.to_string())
        .add_attribute("target", target))
}

pub fn execute_revoke_vote(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.is_guardian(&info.sender) {
        return Err(ContractError::NotGuardian {
            address: info.sender.to_string(),
        });
    }

    let state = PAUSE_STATE.load(deps.storage)?;
    if !VOTES.has(deps.storage, (state.round, &info.sender)) {
        return Ok(Response::new()
            .add_attribute("action", "revoke_vote")
            .add_attribute("result", "noop"));
    }

    VOTES.remove(deps.storage, (state.round, &info.sender));
    let votes = count_votes(deps.storage, state.round)?;

    Ok(Response::new()
        .add_attribute("action", "revoke_vote")
        .add_attribute("guardian", info.sender)
        .add_attribute("round", state.round.to_string())
        .add_attribute("votes", votes.to_string())
        .add_attribute("result", "revoked"))
}

pub fn execute_set_bridge_target(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let target = deps.api.addr_validate(&address)?;
    if config.bridge_target.as_ref() == Some(&target) {
        return Ok(Response::new()
            .add_attribute("method", "set_bridge_target")
            .add_attribute("target", target)
            .add_attribute("result", "noop"));
    }

    config.bridge_target = Some(target.clone());
    CONFIG.save(deps.storage, &config)?;

    let mut response = Response::new();
    // A new target inherits the pause already in effect
    let state = PAUSE_STATE.load(deps.storage)?;
    if state.paused {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: target.to_string(),
            msg: to_json_binary(&TargetExecuteMsg::Pause {})?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("method", "set_bridge_target")
        .add_attribute("target", target)
        .add_attribute("paused", state.paused.to_string())
        .add_attribute("result", "updated"))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                threshold: config.threshold,
                bridge_target: config.bridge_target,
            })
        }
        QueryMsg::Guardians {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&GuardiansResponse {
                guardians: config.guardians,
                threshold: config.threshold,
            })
        }
        QueryMsg::PauseState {} => {
            let state = PAUSE_STATE.load(deps.storage)?;
            to_json_binary(&PauseStateResponse {
                paused: state.paused,
                round: state.round,
                votes: count_votes(deps.storage, state.round)?,
            })
        }
        QueryMsg::HasVoted { guardian } => {
            let guardian = deps.api.addr_validate(&guardian)?;
            let state = PAUSE_STATE.load(deps.storage)?;
            to_json_binary(&HasVotedResponse {
                has_voted: VOTES.has(deps.storage, (state.round, &guardian)),
            })
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
