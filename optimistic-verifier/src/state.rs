//! State definitions for the optimistic verifier contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::{ClaimResponse, ClaimState, FraudVerdict};

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-optimistic-verifier";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default challenge window (24 hours)
pub const DEFAULT_CHALLENGE_PERIOD: u64 = 86_400;

/// Default bond (1 unit of a 6-decimal denom)
pub const DEFAULT_CHALLENGE_BOND: Uint128 = Uint128::new(1_000_000);

/// Default reward paid to the winner of a challenge (0.5 unit)
pub const DEFAULT_CHALLENGER_REWARD: Uint128 = Uint128::new(500_000);

// ============================================================================
// Types
// ============================================================================

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Adjudicates challenges; required before any challenge can resolve
    pub fraud_proof_verifier: Option<Addr>,
    /// Receives the part of a losing bond not paid out as reward
    pub treasury: Addr,
    /// Native denom bonds are posted in
    pub bond_denom: String,
    /// Seconds a new claim stays open to challenge
    pub challenge_period: u64,
    pub challenge_bond: Uint128,
    pub challenger_reward: Uint128,
}

#[cw_serde]
pub struct Claim {
    pub id: u64,
    /// Receives the bond back (and the reward if a challenge fails)
    pub claimant: Addr,
    /// Caller of `SubmitClaim`
    pub submitter: Addr,
    pub payload_hash: Binary,
    /// Bond posted, fixed at submission
    pub bond_amount: Uint128,
    /// Reward owed to the challenge winner, fixed at submission
    pub reward_amount: Uint128,
    pub submitted_at: Timestamp,
    /// `submitted_at + challenge_period`, fixed at submission
    pub challenge_deadline: Timestamp,
    pub state: ClaimState,
    /// Set once the authorized consumer has acted on a finalized claim
    pub settled: bool,
}

impl Claim {
    pub fn to_response(&self) -> ClaimResponse {
        ClaimResponse {
            id: self.id,
            claimant: self.claimant.clone(),
            submitter: self.submitter.clone(),
            payload_hash: self.payload_hash.clone(),
            bond_amount: self.bond_amount,
            reward_amount: self.reward_amount,
            submitted_at: self.submitted_at,
            challenge_deadline: self.challenge_deadline,
            state: self.state,
            settled: self.settled,
        }
    }
}

#[cw_serde]
pub struct Challenge {
    pub claim_id: u64,
    pub challenger: Addr,
    /// JSON `FraudProof`, passed through to the verifier untouched
    pub evidence: Binary,
    pub bond_amount: Uint128,
    pub raised_at: Timestamp,
    /// Set when the challenge is resolved
    pub verdict: Option<FraudVerdict>,
    pub reason: Option<String>,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Next claim id; ids start at 1
pub const NEXT_CLAIM_ID: Item<u64> = Item::new("next_claim_id");

pub const CLAIMS: Map<u64, Claim> = Map::new("claims");

/// At most one challenge per claim, keyed by claim id
pub const CHALLENGES: Map<u64, Challenge> = Map::new("challenges");

/// Contracts allowed to submit on behalf of users and consume finalized claims
pub const AUTHORIZED_CALLERS: Map<&Addr, bool> = Map::new("authorized_callers");
