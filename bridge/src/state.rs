//! State definitions for the bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::{AssetInfo, WithdrawPayload};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Mirrors the guardian's pause decision
    pub paused: bool,
    /// Threshold attestation checks (fast path)
    pub validator: Addr,
    /// Claim lifecycle (slow path)
    pub optimistic_verifier: Addr,
    pub rate_limiter: Addr,
    /// Only this contract may pause or unpause
    pub guardian: Addr,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

/// Outgoing deposit record
#[cw_serde]
pub struct DepositRecord {
    pub nonce: u64,
    pub sender: Addr,
    pub token: AssetInfo,
    pub amount: Uint128,
    pub dest_chain: u64,
    /// Recipient on the destination chain (32 bytes)
    pub dest_account: Binary,
    pub deposited_at: Timestamp,
}

/// Slow-path withdrawal waiting on its claim
#[cw_serde]
pub struct PendingRelease {
    pub claim_id: u64,
    pub payload: WithdrawPayload,
    pub payload_hash: Binary,
    pub submitter: Addr,
    pub released: bool,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_deposits: u64,
    /// Releases through signer attestations
    pub total_fast_withdrawals: u64,
    /// Claims opened through the optimistic verifier
    pub total_claims_submitted: u64,
    /// Releases of finalized claims
    pub total_claim_releases: u64,
}

// ============================================================================
// Storage Keys
// ============================================================================

/// Contract name for migration
pub const CONTRACT_NAME: &str = "crates.io:bridge";
/// Contract version for migration
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Admin timelock duration (7 days in seconds)
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

pub const CONFIG: Item<Config> = Item::new("config");
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");
pub const STATS: Item<Stats> = Item::new("stats");

/// Next outgoing deposit nonce
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");
pub const DEPOSITS: Map<u64, DepositRecord> = Map::new("deposits");

/// Locked balances per token key (denom or CW20 address)
pub const LOCKED_BALANCES: Map<String, Uint128> = Map::new("locked_balances");

/// Payload hashes already paid out on either path
pub const PROCESSED: Map<&[u8], bool> = Map::new("processed");

/// Latest claim opened for a payload hash
pub const CLAIM_BY_PAYLOAD: Map<&[u8], u64> = Map::new("claim_by_payload");
pub const PENDING_RELEASES: Map<u64, PendingRelease> = Map::new("pending_releases");
