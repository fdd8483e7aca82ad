//! Message types for the bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw20::Cw20ReceiveMsg;

use common::{AssetInfo, WithdrawPayload};

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    pub validator: String,
    pub optimistic_verifier: String,
    pub rate_limiter: String,
    pub guardian: String,
    /// Receives withdrawal fees
    pub fee_recipient: String,
    /// Withdrawal fee in basis points (max 100)
    pub fee_bps: u64,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock exactly one native coin for transfer to `dest_chain`
    Deposit {
        dest_chain: u64,
        /// Recipient on the destination chain (32 bytes)
        dest_account: Binary,
    },

    /// CW20 receive hook, carrying a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    /// Release a transfer from another chain.
    ///
    /// With signatures the validator must accept them and the transfer is paid
    /// at once. Without signatures a claim is opened on the optimistic
    /// verifier; attach its bond.
    Withdraw {
        payload: WithdrawPayload,
        signatures: Vec<Binary>,
    },

    /// Pay out the transfer behind a finalized claim. Anyone may call.
    ReleaseClaim { claim_id: u64 },

    // ========================================================================
    // Guardian
    // ========================================================================
    Pause {},
    Unpause {},

    // ========================================================================
    // Admin
    // ========================================================================
    /// Propose a new admin (7-day timelock)
    ProposeAdmin { new_admin: String },
    /// Accept the pending admin role after the timelock
    AcceptAdmin {},
    CancelAdminProposal {},

    SetFeeParams {
        fee_bps: Option<u64>,
        fee_recipient: Option<String>,
    },

    /// Move stuck assets out while paused
    RecoverAsset {
        asset: AssetInfo,
        amount: Uint128,
        recipient: String,
    },
}

/// Payload of a CW20 `Send` to the bridge
#[cw_serde]
pub enum ReceiveMsg {
    Deposit { dest_chain: u64, dest_account: Binary },
}

// ============================================================================
// Query
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatusResponse)]
    Status {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(Option<DepositResponse>)]
    Deposit { nonce: u64 },

    #[returns(Option<PendingReleaseResponse>)]
    PendingRelease { claim_id: u64 },

    #[returns(IsProcessedResponse)]
    IsProcessed { payload_hash: Binary },

    /// Token key is the denom or CW20 address
    #[returns(LockedBalanceResponse)]
    LockedBalance { token: String },

    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},

    /// Hash a payload the way signers and claims commit to it
    #[returns(ComputePayloadHashResponse)]
    ComputePayloadHash { payload: WithdrawPayload },
}

// ============================================================================
// Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub validator: Addr,
    pub optimistic_verifier: Addr,
    pub rate_limiter: Addr,
    pub guardian: Addr,
    pub fee_bps: u64,
    pub fee_recipient: Addr,
}

#[cw_serde]
pub struct StatusResponse {
    pub paused: bool,
    /// Nonce the next deposit will receive
    pub next_nonce: u64,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_deposits: u64,
    pub total_fast_withdrawals: u64,
    pub total_claims_submitted: u64,
    pub total_claim_releases: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub nonce: u64,
    pub sender: Addr,
    pub token: AssetInfo,
    pub amount: Uint128,
    pub dest_chain: u64,
    pub dest_account: Binary,
    pub deposited_at: Timestamp,
}

#[cw_serde]
pub struct PendingReleaseResponse {
    pub claim_id: u64,
    pub payload: WithdrawPayload,
    pub payload_hash: Binary,
    pub submitter: Addr,
    pub released: bool,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub token: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}

#[cw_serde]
pub struct ComputePayloadHashResponse {
    pub hash: Binary,
    /// 0x-prefixed hex of `hash`
    pub hash_hex: String,
}
