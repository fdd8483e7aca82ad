use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use common::FraudVerdictResponse;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub optimistic_verifier: Option<String>,
    pub bridge_validator: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin only. Setting the current address again is a no-op.
    SetOptimisticVerifier { address: String },
    /// Admin only. Setting the current address again is a no-op.
    SetBridgeValidator { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Judge `proof` (JSON `FraudProof`) against claim `claim_id`
    #[returns(FraudVerdictResponse)]
    VerifyFraudProof { claim_id: u64, proof: Binary },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub optimistic_verifier: Option<Addr>,
    pub bridge_validator: Option<Addr>,
}
