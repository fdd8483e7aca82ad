//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause (guardian contract only)
//! - Admin transfer (propose/accept/cancel)
//! - Fee parameters
//! - Asset recovery (emergency)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::fee_manager::{validate_fee_bps, FEE_CONFIG};
use crate::state::{PendingAdmin, ADMIN_TIMELOCK_DURATION, CONFIG, PENDING_ADMIN};
use common::AssetInfo;

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Set the pause flag. Only the guardian contract may call; repeating the
/// current value is a no-op.
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.guardian {
        return Err(ContractError::NotGuardian {
            sender: info.sender.to_string(),
        });
    }

    let method = if paused { "pause" } else { "unpause" };
    if config.paused == paused {
        return Ok(Response::new()
            .add_attribute("method", method)
            .add_attribute("result", "noop"));
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("result", "updated"))
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Propose a new admin (starts timelock).
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let pending = PendingAdmin {
        new_address: new_admin_addr.clone(),
        execute_after: env.block.time.plus_seconds(ADMIN_TIMELOCK_DURATION),
    };
    PENDING_ADMIN.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", new_admin_addr)
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending admin role (after timelock).
pub fn execute_accept_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.admin = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("new_admin", pending.new_address))
}

/// Cancel pending admin proposal.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_admin_proposal"))
}

// ============================================================================
// Fees
// ============================================================================

pub fn execute_set_fee_params(
    deps: DepsMut,
    info: MessageInfo,
    fee_bps: Option<u64>,
    fee_recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    if let Some(bps) = fee_bps {
        validate_fee_bps(bps)?;
        fee_config.fee_bps = bps;
    }
    if let Some(recipient) = fee_recipient {
        fee_config.fee_recipient = deps.api.addr_validate(&recipient)?;
    }
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_params")
        .add_attribute("fee_bps", fee_config.fee_bps.to_string())
        .add_attribute("fee_recipient", fee_config.fee_recipient))
}

// ============================================================================
// Asset Recovery
// ============================================================================

/// Recover stuck assets (emergency, requires paused state).
///
/// LOCKED_BALANCES is not updated here; the admin reconciles separately.
pub fn execute_recover_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if !config.paused {
        return Err(ContractError::RecoveryNotAvailable);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let message = asset.transfer_msg(&recipient_addr, amount)?;

    Ok(Response::new()
        .add_message(message)
        .add_attribute("method", "recover_asset")
        .add_attribute("asset", asset.key())
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}
