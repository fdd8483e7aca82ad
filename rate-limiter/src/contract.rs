//! Rate Limiter Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Storage, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::limit::{check_and_update_rate_limit, current_window, effective_limit, try_consume};
use crate::msg::{
    CanConsumeResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, IsAuthorizedResponse,
    MigrateMsg, QueryMsg, RateLimitResponse, WindowResponse,
};
use crate::state::{
    Config, RateLimitConfig, AUTHORIZED_CALLERS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    DEFAULT_WINDOW_SECONDS, RATE_LIMITS, RATE_WINDOWS,
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

    if let Some(limit) = &msg.default_limit {
        validate_limit(limit)?;
    }

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        default_limit: msg.default_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("default_limit", config.default_limit.is_some().to_string()))
}

fn validate_limit(limit: &RateLimitConfig) -> Result<(), ContractError> {
    if limit.window_seconds == 0 {
        return Err(ContractError::InvalidParams {
            reason: "window_seconds must be positive".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Consume { token, amount } => execute_consume(deps, env, info, token, amount),
        ExecuteMsg::SetAuthorizedCaller { caller, authorized } => {
            execute_set_authorized_caller(deps, info, caller, authorized)
        }
        ExecuteMsg::SetRateLimit {
            token,
            max_per_transaction,
            max_per_period,
            window_seconds,
        } => execute_set_rate_limit(
            deps,
            info,
            token,
            RateLimitConfig {
                max_per_transaction,
                max_per_period,
                window_seconds: window_seconds.unwrap_or(DEFAULT_WINDOW_SECONDS),
            },
        ),
        ExecuteMsg::RemoveRateLimit { token } => execute_remove_rate_limit(deps, info, token),
        ExecuteMsg::SetDefaultLimit { limit } => execute_set_default_limit(deps, info, limit),
    }
}

pub fn execute_consume(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let authorized = AUTHORIZED_CALLERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !authorized {
        return Err(ContractError::UnauthorizedCaller {
            caller: info.sender.to_string(),
        });
    }

    let window = check_and_update_rate_limit(deps.storage, &env, &token, amount)?;

    let mut response = Response::new()
        .add_attribute("action", "consume")
        .add_attribute("token", &token)
        .add_attribute("amount", amount.to_string());
    if let Some(window) = window {
        response = response
            .add_attribute("window_start", window.window_start.seconds().to_string())
            .add_attribute("window_used", window.used.to_string());
    }
    Ok(response)
}

fn ensure_admin(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn execute_set_authorized_caller(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;

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

pub fn execute_set_rate_limit(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    limit: RateLimitConfig,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    validate_limit(&limit)?;

    RATE_LIMITS.save(deps.storage, &token, &limit)?;

    // A lowered cap applies to the open window too
    if let Some(mut window) = RATE_WINDOWS.may_load(deps.storage, &token)? {
        if !limit.max_per_period.is_zero() && window.used > limit.max_per_period {
            window.used = limit.max_per_period;
            RATE_WINDOWS.save(deps.storage, &token, &window)?;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "set_rate_limit")
        .add_attribute("token", token)
        .add_attribute("max_per_transaction", limit.max_per_transaction.to_string())
        .add_attribute("max_per_period", limit.max_per_period.to_string())
        .add_attribute("window_seconds", limit.window_seconds.to_string()))
}

pub fn execute_remove_rate_limit(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;

    RATE_LIMITS.remove(deps.storage, &token);
    RATE_WINDOWS.remove(deps.storage, &token);

    Ok(Response::new()
        .add_attribute("method", "remove_rate_limit")
        .add_attribute("token", token))
}

pub fn execute_set_default_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: Option<RateLimitConfig>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    if let Some(limit) = &limit {
        validate_limit(limit)?;
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.default_limit = limit;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_default_limit")
        .add_attribute("enabled", config.default_limit.is_some().to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                default_limit: config.default_limit,
            })
        }
        QueryMsg::RateLimit { token } => to_json_binary(&query_rate_limit(deps, token)?),
        QueryMsg::Window { token } => to_json_binary(&query_window(deps, env, token)?),
        QueryMsg::CanConsume { token, amount } => {
            to_json_binary(&query_can_consume(deps, env, token, amount)?)
        }
        QueryMsg::IsAuthorized { caller } => {
            let caller = deps.api.addr_validate(&caller)?;
            to_json_binary(&IsAuthorizedResponse {
                authorized: AUTHORIZED_CALLERS
                    .may_load(deps.storage, &caller)?
                    .unwrap_or(false),
            })
        }
    }
}

pub fn query_rate_limit(deps: Deps, token: String) -> StdResult<Option<RateLimitResponse>> {
    let is_default = !RATE_LIMITS.has(deps.storage, &token);
    let limit = effective_limit(deps.storage, &token)?;
    Ok(limit.map(|limit| RateLimitResponse {
        token,
        max_per_transaction: limit.max_per_transaction,
        max_per_period: limit.max_per_period,
        window_seconds: limit.window_seconds,
        is_default,
    }))
}

pub fn query_window(deps: Deps, env: Env, token: String) -> StdResult<WindowResponse> {
    let now = env.block.time;
    let Some(limit) = effective_limit(deps.storage, &token)? else {
        return Ok(WindowResponse {
            token,
            window_start: now,
            window_end: now,
            used: Uint128::zero(),
            remaining: None,
        });
    };

    let window = current_window(RATE_WINDOWS.may_load(deps.storage, &token)?, &limit, now);
    let remaining = if limit.max_per_period.is_zero() {
        None
    } else {
        Some(limit.max_per_period.saturating_sub(window.used))
    };

    Ok(WindowResponse {
        token,
        window_start: window.window_start,
        window_end: window.window_start.plus_seconds(limit.window_seconds),
        used: window.used,
        remaining,
    })
}

pub fn query_can_consume(
    deps: Deps,
    env: Env,
    token: String,
    amount: Uint128,
) -> StdResult<CanConsumeResponse> {
    let Some(limit) = effective_limit(deps.storage, &token)? else {
        return Ok(CanConsumeResponse {
            allowed: true,
            reason: None,
        });
    };

    let stored = RATE_WINDOWS.may_load(deps.storage, &token)?;
    let response = match try_consume(&limit, stored, env.block.time, amount) {
        Ok(_) => CanConsumeResponse {
            allowed: true,
            reason: None,
        },
        Err(err) => CanConsumeResponse {
            allowed: false,
            reason: Some(err.to_string()),
        },
    };
    Ok(response)
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
