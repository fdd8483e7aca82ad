//! Outgoing transfer handlers (native Deposit and CW20 Receive).

use cosmwasm_std::{Addr, Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use super::{check_capacity, consume_msg, ensure_not_paused, lock};
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{DepositRecord, CONFIG, DEPOSITS, OUTGOING_NONCE, STATS};
use common::{bytes32_to_hex, parse_bytes32, AssetInfo};

/// Lock a single native coin for transfer to `dest_chain`.
pub fn execute_deposit_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_chain: u64,
    dest_account: Binary,
) -> Result<Response, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidAmount {
            reason: "Send exactly one coin".to_string(),
        });
    }

    let coin = &info.funds[0];
    let token = AssetInfo::Native {
        denom: coin.denom.clone(),
    };
    record_deposit(
        deps,
        env,
        info.sender,
        token,
        coin.amount,
        dest_chain,
        dest_account,
    )
}

/// CW20 receive hook. `info.sender` is the token contract.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = cosmwasm_std::from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Deposit {
            dest_chain,
            dest_account,
        } => {
            let token = AssetInfo::Cw20 {
                contract_addr: info.sender,
            };
            record_deposit(
                deps,
                env,
                sender,
                token,
                cw20_msg.amount,
                dest_chain,
                dest_account,
            )
        }
    }
}

fn record_deposit(
    deps: DepsMut,
    env: Env,
    sender: Addr,
    token: AssetInfo,
    amount: Uint128,
    dest_chain: u64,
    dest_account: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    let account = parse_bytes32(&dest_account).map_err(|e| ContractError::InvalidPayload {
        reason: format!("dest_account: {}", e),
    })?;

    let token_key = token.key();
    check_capacity(&deps.querier, &config.rate_limiter, &token_key, amount)?;
    let consume = consume_msg(&config.rate_limiter, &token_key, amount)?;

    lock(deps.storage, &token_key, amount)?;

    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let record = DepositRecord {
        nonce,
        sender: sender.clone(),
        token,
        amount,
        dest_chain,
        dest_account,
        deposited_at: env.block.time,
    };
    DEPOSITS.save(deps.storage, nonce, &record)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_deposits += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_message(consume)
        .add_attribute("action", "deposit")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sender)
        .add_attribute("token", token_key)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_chain", dest_chain.to_string())
        .add_attribute("dest_account", bytes32_to_hex(&account)))
}
