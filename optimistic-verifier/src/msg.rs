use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use common::{ClaimResponse, FraudVerdict};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Native denom for bonds
    pub bond_denom: String,
    /// Defaults to 24 hours
    pub challenge_period: Option<u64>,
    /// Defaults to 1_000_000
    pub challenge_bond: Option<Uint128>,
    /// Defaults to 500_000; must not exceed the bond
    pub challenger_reward: Option<Uint128>,
    /// Defaults to the admin
    pub treasury: Option<String>,
    pub fraud_proof_verifier: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a claim on a 32-byte payload hash. Attach the bond in `bond_denom`.
    /// `claimant` may only be set by authorized callers.
    SubmitClaim {
        payload_hash: Binary,
        claimant: Option<String>,
    },
    /// Dispute a claim inside its window. Attach a bond equal to the claim's.
    Challenge { claim_id: u64, evidence: Binary },
    /// Ask the fraud proof verifier for a verdict and settle both bonds
    ResolveChallenge { claim_id: u64 },
    /// Finalize an unchallenged claim once its window has passed
    Finalize { claim_id: u64 },
    /// Mark a finalized claim as acted upon (authorized callers only)
    ConsumeFinalized { claim_id: u64 },

    // ========================================================================
    // Admin
    // ========================================================================
    SetFraudProofVerifier { address: String },
    SetAuthorizedCaller { caller: String, authorized: bool },
    /// Applies to claims submitted afterwards
    UpdateParams {
        challenge_period: Option<u64>,
        challenge_bond: Option<Uint128>,
        challenger_reward: Option<Uint128>,
        treasury: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ClaimResponse)]
    Claim { claim_id: u64 },

    #[returns(Option<ChallengeResponse>)]
    Challenge { claim_id: u64 },

    #[returns(ClaimsResponse)]
    Claims {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Id the next `SubmitClaim` will receive
    #[returns(NextClaimIdResponse)]
    NextClaimId {},

    #[returns(IsAuthorizedResponse)]
    IsAuthorized { caller: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub fraud_proof_verifier: Option<Addr>,
    pub treasury: Addr,
    pub bond_denom: String,
    pub challenge_period: u64,
    pub challenge_bond: Uint128,
    pub challenger_reward: Uint128,
}

#[cw_serde]
pub struct ChallengeResponse {
    pub claim_id: u64,
    pub challenger: Addr,
    pub evidence: Binary,
    pub bond_amount: Uint128,
    pub raised_at: Timestamp,
    pub verdict: Option<FraudVerdict>,
    pub reason: Option<String>,
}

#[cw_serde]
pub struct ClaimsResponse {
    pub claims: Vec<ClaimResponse>,
}

#[cw_serde]
pub struct NextClaimIdResponse {
    pub next_claim_id: u64,
}

#[cw_serde]
pub struct IsAuthorizedResponse {
    pub authorized: bool,
}
