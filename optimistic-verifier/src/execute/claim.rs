//! Claim submission and the unchallenged path to settlement.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use common::{bytes32_to_hex, parse_bytes32, ClaimState};

use super::{is_authorized, load_claim, payout, take_bond};
use crate::error::ContractError;
use crate::state::{Claim, CLAIMS, CONFIG, NEXT_CLAIM_ID};

/// Open a bonded claim on `payload_hash`.
///
/// Authorized callers may name a `claimant` other than themselves; the bond
/// is returned to that claimant.
pub fn execute_submit_claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payload_hash: Binary,
    claimant: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let hash = parse_bytes32(&payload_hash).map_err(|e| ContractError::InvalidPayloadHash {
        reason: e.to_string(),
    })?;

    let claimant = match claimant {
        Some(claimant) => {
            if !is_authorized(deps.storage, &info.sender)? {
                return Err(ContractError::UnauthorizedCaller {
                    caller: info.sender.to_string(),
                });
            }
            deps.api.addr_validate(&claimant)?
        }
        None => info.sender.clone(),
    };

    let refund = take_bond(&info, &config.bond_denom, config.challenge_bond)?;

    let id = NEXT_CLAIM_ID.load(deps.storage)?;
    NEXT_CLAIM_ID.save(deps.storage, &(id + 1))?;

    let claim = Claim {
        id,
        claimant,
        submitter: info.sender.clone(),
        payload_hash: Binary::from(hash.to_vec()),
        bond_amount: config.challenge_bond,
        reward_amount: config.challenger_reward,
        submitted_at: env.block.time,
        challenge_deadline: env.block.time.plus_seconds(config.challenge_period),
        state: ClaimState::Submitted,
        settled: false,
    };
    CLAIMS.save(deps.storage, id, &claim)?;

    Ok(Response::new()
        .add_messages(refund)
        .add_attribute("action", "submit_claim")
        .add_attribute("claim_id", id.to_string())
        .add_attribute("claimant", claim.claimant)
        .add_attribute("submitter", claim.submitter)
        .add_attribute("payload_hash", bytes32_to_hex(&hash))
        .add_attribute("bond", claim.bond_amount.to_string())
        .add_attribute(
            "challenge_deadline",
            claim.challenge_deadline.seconds().to_string(),
        ))
}

/// Finalize an unchallenged claim once its window has passed. Anyone may call.
pub fn execute_finalize(
    deps: DepsMut,
    env: Env,
    claim_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut claim = load_claim(deps.storage, claim_id)?;

    let next = claim
        .state
        .finalize()
        .map_err(|transition| ContractError::InvalidClaimState {
            claim_id,
            transition,
        })?;

    if env.block.time < claim.challenge_deadline {
        return Err(ContractError::ChallengeWindowOpen {
            claim_id,
            deadline: claim.challenge_deadline,
        });
    }

    claim.state = next;
    CLAIMS.save(deps.storage, claim_id, &claim)?;

    Ok(Response::new()
        .add_messages(payout(&claim.claimant, &config.bond_denom, claim.bond_amount))
        .add_attribute("action", "finalize_claim")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("state", claim.state.as_str())
        .add_attribute("bond_refund", claim.bond_amount.to_string()))
}

/// Mark a finalized claim as acted upon. Authorized callers only; each
/// claim can be consumed once.
pub fn execute_consume_finalized(
    deps: DepsMut,
    info: MessageInfo,
    claim_id: u64,
) -> Result<Response, ContractError> {
    if !is_authorized(deps.storage, &info.sender)? {
        return Err(ContractError::UnauthorizedCaller {
            caller: info.sender.to_string(),
        });
    }

    let mut claim = load_claim(deps.storage, claim_id)?;
    if claim.state != ClaimState::Finalized {
        return Err(ContractError::ClaimNotFinalized { claim_id });
    }
    if claim.settled {
        return Err(ContractError::ClaimAlreadySettled { claim_id });
    }

    claim.settled = true;
    CLAIMS.save(deps.storage, claim_id, &claim)?;

    Ok(Response::new()
        .add_attribute("action", "consume_finalized")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("consumer", info.sender))
}
