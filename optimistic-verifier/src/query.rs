//! Query handlers for the optimistic verifier.

use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use common::ClaimResponse;

use crate::msg::{
    ChallengeResponse, ClaimsResponse, ConfigResponse, IsAuthorizedResponse, NextClaimIdResponse,
};
use crate::state::{AUTHORIZED_CALLERS, CHALLENGES, CLAIMS, CONFIG, NEXT_CLAIM_ID};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        fraud_proof_verifier: config.fraud_proof_verifier,
        treasury: config.treasury,
        bond_denom: config.bond_denom,
        challenge_period: config.challenge_period,
        challenge_bond: config.challenge_bond,
        challenger_reward: config.challenger_reward,
    })
}

pub fn query_claim(deps: Deps, claim_id: u64) -> StdResult<ClaimResponse> {
    CLAIMS
        .may_load(deps.storage, claim_id)?
        .map(|claim| claim.to_response())
        .ok_or_else(|| StdError::generic_err(format!("Claim {} not found", claim_id)))
}

pub fn query_challenge(deps: Deps, claim_id: u64) -> StdResult<Option<ChallengeResponse>> {
    Ok(CHALLENGES
        .may_load(deps.storage, claim_id)?
        .map(|c| ChallengeResponse {
            claim_id: c.claim_id,
            challenger: c.challenger,
            evidence: c.evidence,
            bond_amount: c.bond_amount,
            raised_at: c.raised_at,
            verdict: c.verdict,
            reason: c.reason,
        }))
}

/// Claims in ascending id order.
pub fn query_claims(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ClaimsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let claims = CLAIMS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, claim)| claim.to_response()))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ClaimsResponse { claims })
}

pub fn query_next_claim_id(deps: Deps) -> StdResult<NextClaimIdResponse> {
    Ok(NextClaimIdResponse {
        next_claim_id: NEXT_CLAIM_ID.load(deps.storage)?,
    })
}

pub fn query_is_authorized(deps: Deps, caller: String) -> StdResult<IsAuthorizedResponse> {
    let caller = deps.api.addr_validate(&caller)?;
    Ok(IsAuthorizedResponse {
        authorized: AUTHORIZED_CALLERS
            .may_load(deps.storage, &caller)?
            .unwrap_or(false),
    })
}
