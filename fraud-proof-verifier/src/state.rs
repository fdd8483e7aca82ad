use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult};
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-fraud-proof-verifier";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Source of claims under dispute
    pub optimistic_verifier: Option<Addr>,
    /// Signer set whose attestations count as evidence
    pub bridge_validator: Option<Addr>,
}

impl Config {
    pub fn optimistic_verifier(&self) -> StdResult<&Addr> {
        self.optimistic_verifier
            .as_ref()
            .ok_or_else(|| StdError::generic_err("Optimistic verifier not set"))
    }

    pub fn bridge_validator(&self) -> StdResult<&Addr> {
        self.bridge_validator
            .as_ref()
            .ok_or_else(|| StdError::generic_err("Bridge validator not set"))
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
