//! Message types for the validator contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct InstantiateMsg {
    /// Governance address for signer set updates
    pub admin: String,
    /// Signer addresses as 0x-prefixed 20-byte hex
    pub signers: Vec<String>,
    /// Distinct signatures required for an attestation
    pub threshold: u32,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the signer set (admin only). Same checks as instantiation.
    UpdateSignerSet {
        signers: Vec<String>,
        threshold: u32,
    },
    /// Hand governance to another address (admin only)
    UpdateAdmin { admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(SignerSetResponse)]
    SignerSet {},

    #[returns(IsSignerResponse)]
    IsSigner { address: String },

    /// Check an attestation over `message_hash` (32 bytes)
    #[returns(VerifyResponse)]
    Verify {
        message_hash: Binary,
        signatures: Vec<Binary>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct SignerSetResponse {
    /// 0x-prefixed lowercase hex addresses, in set order
    pub signers: Vec<String>,
    pub threshold: u32,
}

#[cw_serde]
pub struct IsSignerResponse {
    pub is_signer: bool,
}

#[cw_serde]
pub struct VerifyResponse {
    pub valid: bool,
    /// Members counted toward the threshold (empty when invalid)
    pub signers: Vec<String>,
    pub threshold: u32,
    /// Why the attestation was rejected
    pub reason: Option<String>,
}
