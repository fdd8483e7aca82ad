//! Query handlers for the bridge contract.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::fee_manager::FEE_CONFIG;
use crate::msg::{
    ComputePayloadHashResponse, ConfigResponse, DepositResponse, IsProcessedResponse,
    LockedBalanceResponse, PendingAdminResponse, PendingReleaseResponse, StatsResponse,
    StatusResponse,
};
use crate::state::{
    CONFIG, DEPOSITS, LOCKED_BALANCES, OUTGOING_NONCE, PENDING_ADMIN, PENDING_RELEASES, PROCESSED,
    STATS,
};
use common::{bytes32_to_hex, WithdrawPayload};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        validator: config.validator,
        optimistic_verifier: config.optimistic_verifier,
        rate_limiter: config.rate_limiter,
        guardian: config.guardian,
        fee_bps: fee_config.fee_bps,
        fee_recipient: fee_config.fee_recipient,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StatusResponse {
        paused: config.paused,
        next_nonce: OUTGOING_NONCE.load(deps.storage)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_deposits: stats.total_deposits,
        total_fast_withdrawals: stats.total_fast_withdrawals,
        total_claims_submitted: stats.total_claims_submitted,
        total_claim_releases: stats.total_claim_releases,
    })
}

pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    Ok(PENDING_ADMIN
        .may_load(deps.storage)?
        .map(|p| PendingAdminResponse {
            new_address: p.new_address,
            execute_after: p.execute_after,
        }))
}

// ============================================================================
// Transfer Queries
// ============================================================================

pub fn query_deposit(deps: Deps, nonce: u64) -> StdResult<Option<DepositResponse>> {
    Ok(DEPOSITS.may_load(deps.storage, nonce)?.map(|d| DepositResponse {
        nonce: d.nonce,
        sender: d.sender,
        token: d.token,
        amount: d.amount,
        dest_chain: d.dest_chain,
        dest_account: d.dest_account,
        deposited_at: d.deposited_at,
    }))
}

pub fn query_pending_release(
    deps: Deps,
    claim_id: u64,
) -> StdResult<Option<PendingReleaseResponse>> {
    Ok(PENDING_RELEASES
        .may_load(deps.storage, claim_id)?
        .map(|p| PendingReleaseResponse {
            claim_id: p.claim_id,
            payload: p.payload,
            payload_hash: p.payload_hash,
            submitter: p.submitter,
            released: p.released,
        }))
}

pub fn query_is_processed(deps: Deps, payload_hash: Binary) -> StdResult<IsProcessedResponse> {
    Ok(IsProcessedResponse {
        processed: PROCESSED.has(deps.storage, payload_hash.as_slice()),
    })
}

pub fn query_locked_balance(deps: Deps, token: String) -> StdResult<LockedBalanceResponse> {
    let amount = LOCKED_BALANCES
        .may_load(deps.storage, token.clone())?
        .unwrap_or_default();
    Ok(LockedBalanceResponse { token, amount })
}

// ============================================================================
// Hash Utilities
// ============================================================================

pub fn query_compute_payload_hash(payload: WithdrawPayload) -> StdResult<ComputePayloadHashResponse> {
    let hash = payload.hash();
    Ok(ComputePayloadHashResponse {
        hash: Binary::from(hash.to_vec()),
        hash_hex: bytes32_to_hex(&hash),
    })
}
