//! Incoming transfer handlers.
//!
//! A withdrawal takes one of two paths:
//! 1. Fast path: `Withdraw` with signatures the validator accepts pays out at once.
//! 2. Slow path: `Withdraw` without signatures opens a bonded claim on the
//!    optimistic verifier; `ReleaseClaim` pays out once that claim finalizes.
//!
//! Both paths mark the payload hash processed, consume rate limiter capacity
//! and deduct the withdrawal fee.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, MessageInfo, Response,
    Storage, Uint128, WasmMsg,
};

use super::{check_capacity, consume_msg, ensure_not_paused, unlock};
use crate::error::ContractError;
use crate::fee_manager::FEE_CONFIG;
use crate::state::{
    Config, PendingRelease, CLAIM_BY_PAYLOAD, CONFIG, PENDING_RELEASES, PROCESSED, STATS,
};
use common::{
    bytes32_to_hex, parse_bytes32, AssetInfo, ClaimResponse, ClaimState, WithdrawPayload,
};
use optimistic_verifier::msg::{
    ConfigResponse as VerifierConfigResponse, ExecuteMsg as VerifierExecuteMsg,
    NextClaimIdResponse, QueryMsg as VerifierQueryMsg,
};
use validator::msg::{QueryMsg as ValidatorQueryMsg, VerifyResponse};

// ============================================================================
// Withdraw
// ============================================================================

/// Withdraw entry point. Non-empty `signatures` select the fast path.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    payload: WithdrawPayload,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    let recipient = validate_payload(deps.as_ref(), &payload)?;
    let hash = payload.hash();
    ensure_unprocessed(deps.storage, &hash)?;

    if signatures.is_empty() {
        submit_claim(deps, info, &config, payload, hash)
    } else {
        if !info.funds.is_empty() {
            return Err(ContractError::InvalidAmount {
                reason: "Attested withdrawals take no funds".to_string(),
            });
        }
        withdraw_attested(deps, &config, payload, recipient, hash, signatures)
    }
}

fn withdraw_attested(
    deps: DepsMut,
    config: &Config,
    payload: WithdrawPayload,
    recipient: Addr,
    hash: [u8; 32],
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    let verdict: VerifyResponse = deps.querier.query_wasm_smart(
        &config.validator,
        &ValidatorQueryMsg::Verify {
            message_hash: Binary::from(hash.to_vec()),
            signatures,
        },
    )?;
    if !verdict.valid {
        return Err(ContractError::InvalidAttestation {
            reason: verdict
                .reason
                .unwrap_or_else(|| "threshold not met".to_string()),
        });
    }

    let token = payload.token.key();
    check_capacity(&deps.querier, &config.rate_limiter, &token, payload.amount)?;

    let (messages, net, fee) = release_transfer(deps.storage, config, &payload, &recipient)?;
    PROCESSED.save(deps.storage, hash.as_slice(), &true)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_fast_withdrawals += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "withdraw")
        .add_attribute("path", "fast")
        .add_attribute("payload_hash", bytes32_to_hex(&hash))
        .add_attribute("signers", verdict.signers.len().to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", net.to_string())
        .add_attribute("fee", fee.to_string()))
}

/// Open a claim for `payload` on behalf of the sender, forwarding the bond.
fn submit_claim(
    deps: DepsMut,
    info: MessageInfo,
    config: &Config,
    payload: WithdrawPayload,
    hash: [u8; 32],
) -> Result<Response, ContractError> {
    // A claim that ended Invalidated may be replaced; anything else blocks.
    if let Some(existing) = CLAIM_BY_PAYLOAD.may_load(deps.storage, hash.as_slice())? {
        let claim = query_claim(deps.as_ref(), config, existing)?;
        if claim.state != ClaimState::Invalidated {
            return Err(ContractError::ClaimAlreadyPending { claim_id: existing });
        }
    }

    let token = payload.token.key();
    check_capacity(&deps.querier, &config.rate_limiter, &token, payload.amount)?;

    let verifier: VerifierConfigResponse = deps
        .querier
        .query_wasm_smart(&config.optimistic_verifier, &VerifierQueryMsg::Config {})?;
    let (bond, refund) = split_bond(&info, &verifier.bond_denom, verifier.challenge_bond)?;

    let next: NextClaimIdResponse = deps
        .querier
        .query_wasm_smart(&config.optimistic_verifier, &VerifierQueryMsg::NextClaimId {})?;
    let claim_id = next.next_claim_id;

    let pending = PendingRelease {
        claim_id,
        payload,
        payload_hash: Binary::from(hash.to_vec()),
        submitter: info.sender.clone(),
        released: false,
    };
    PENDING_RELEASES.save(deps.storage, claim_id, &pending)?;
    CLAIM_BY_PAYLOAD.save(deps.storage, hash.as_slice(), &claim_id)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_claims_submitted += 1;
        Ok(stats)
    })?;

    let mut messages = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.optimistic_verifier.to_string(),
        msg: to_json_binary(&VerifierExecuteMsg::SubmitClaim {
            payload_hash: pending.payload_hash.clone(),
            claimant: Some(info.sender.to_string()),
        })?,
        funds: vec![bond],
    })];
    if !refund.is_empty() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: refund,
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "withdraw")
        .add_attribute("path", "slow")
        .add_attribute("payload_hash", bytes32_to_hex(&hash))
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("submitter", info.sender))
}

// ============================================================================
// ReleaseClaim
// ============================================================================

/// Pay out the transfer behind a finalized claim. Anyone may call.
pub fn execute_release_claim(deps: DepsMut, claim_id: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_paused(&config)?;

    let mut pending = PENDING_RELEASES
        .may_load(deps.storage, claim_id)?
        .ok_or(ContractError::UnknownClaim { claim_id })?;
    let hash = parse_bytes32(&pending.payload_hash)?;
    if pending.released {
        return Err(ContractError::AlreadyProcessed {
            payload_hash: bytes32_to_hex(&hash),
        });
    }
    ensure_unprocessed(deps.storage, &hash)?;

    let claim = query_claim(deps.as_ref(), &config, claim_id)?;
    if claim.payload_hash != pending.payload_hash {
        return Err(ContractError::ClaimPayloadMismatch { claim_id });
    }
    if claim.state != ClaimState::Finalized {
        return Err(ContractError::ClaimNotFinalized { claim_id });
    }
    if claim.settled {
        return Err(ContractError::AlreadyProcessed {
            payload_hash: bytes32_to_hex(&hash),
        });
    }

    let recipient = validate_payload(deps.as_ref(), &pending.payload)?;
    let token = pending.payload.token.key();
    check_capacity(
        &deps.querier,
        &config.rate_limiter,
        &token,
        pending.payload.amount,
    )?;

    let (transfers, net, fee) =
        release_transfer(deps.storage, &config, &pending.payload, &recipient)?;

    pending.released = true;
    PENDING_RELEASES.save(deps.storage, claim_id, &pending)?;
    PROCESSED.save(deps.storage, hash.as_slice(), &true)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_claim_releases += 1;
        Ok(stats)
    })?;

    let consume = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.optimistic_verifier.to_string(),
        msg: to_json_binary(&VerifierExecuteMsg::ConsumeFinalized { claim_id })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(consume)
        .add_messages(transfers)
        .add_attribute("action", "release_claim")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("payload_hash", bytes32_to_hex(&hash))
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", net.to_string())
        .add_attribute("fee", fee.to_string()))
}

// ============================================================================
// Helpers
// ============================================================================

/// Check the payload fields and return the validated recipient.
pub(crate) fn validate_payload(
    deps: Deps,
    payload: &WithdrawPayload,
) -> Result<Addr, ContractError> {
    if payload.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    if payload.src_account.len() != 32 {
        return Err(ContractError::InvalidPayload {
            reason: format!(
                "src_account must be 32 bytes, got {}",
                payload.src_account.len()
            ),
        });
    }
    if let AssetInfo::Cw20 { contract_addr } = &payload.token {
        deps.api
            .addr_validate(contract_addr.as_str())
            .map_err(|e| ContractError::InvalidPayload {
                reason: format!("token: {}", e),
            })?;
    }
    deps.api
        .addr_validate(&payload.recipient)
        .map_err(|e| ContractError::InvalidPayload {
            reason: format!("recipient: {}", e),
        })
}

fn ensure_unprocessed(storage: &dyn Storage, hash: &[u8; 32]) -> Result<(), ContractError> {
    if PROCESSED.has(storage, hash.as_slice()) {
        return Err(ContractError::AlreadyProcessed {
            payload_hash: bytes32_to_hex(hash),
        });
    }
    Ok(())
}

fn query_claim(
    deps: Deps,
    config: &Config,
    claim_id: u64,
) -> Result<ClaimResponse, ContractError> {
    Ok(deps.querier.query_wasm_smart(
        &config.optimistic_verifier,
        &VerifierQueryMsg::Claim { claim_id },
    )?)
}

/// Take exactly `required` of `denom` out of the attached funds.
///
/// Returns the bond coin and whatever else was attached.
fn split_bond(
    info: &MessageInfo,
    denom: &str,
    required: Uint128,
) -> Result<(Coin, Vec<Coin>), ContractError> {
    let provided: Uint128 = info
        .funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum();
    if provided < required {
        return Err(ContractError::InsufficientBond {
            required,
            provided,
            denom: denom.to_string(),
        });
    }

    let mut refund: Vec<Coin> = info
        .funds
        .iter()
        .filter(|c| c.denom != denom && !c.amount.is_zero())
        .cloned()
        .collect();
    let excess = provided - required;
    if !excess.is_zero() {
        refund.push(Coin {
            denom: denom.to_string(),
            amount: excess,
        });
    }
    Ok((
        Coin {
            denom: denom.to_string(),
            amount: required,
        },
        refund,
    ))
}

/// Unlock the gross amount and build the consume and payout messages.
///
/// Returns `(messages, net, fee)`.
fn release_transfer(
    storage: &mut dyn Storage,
    config: &Config,
    payload: &WithdrawPayload,
    recipient: &Addr,
) -> Result<(Vec<CosmosMsg>, Uint128, Uint128), ContractError> {
    let token = payload.token.key();
    unlock(storage, &token, payload.amount)?;

    let fee_config = FEE_CONFIG.load(storage)?;
    let (net, fee) = fee_config.split(payload.amount);

    let mut messages = vec![
        consume_msg(&config.rate_limiter, &token, payload.amount)?,
        payload.token.transfer_msg(recipient, net)?,
    ];
    if !fee.is_zero() {
        messages.push(
            payload
                .token
                .transfer_msg(&fee_config.fee_recipient, fee)?,
        );
    }
    Ok((messages, net, fee))
}
