//! State definitions for the guardian contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-guardian";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest guardian set accepted at instantiation
pub const MIN_GUARDIANS: usize = 3;

#[cw_serde]
pub struct Config {
    /// Admin allowed to set the bridge target
    pub admin: Addr,
    /// Ordered guardian set
    pub guardians: Vec<Addr>,
    /// Votes needed in one round to flip the pause flag
    pub threshold: u32,
    /// Contract that receives `Pause {}` / `Unpause {}`
    pub bridge_target: Option<Addr>,
}

impl Config {
    pub fn is_guardian(&self, address: &Addr) -> bool {
        self.guardians.contains(address)
    }
}

#[cw_serde]
pub struct PauseState {
    pub paused: bool,
    /// Incremented on every flip; votes from earlier rounds are ignored
    pub round: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PAUSE_STATE: Item<PauseState> = Item::new("pause_state");

/// Votes cast toward flipping the flag.
/// Key: (round, guardian)
pub const VOTES: Map<(u64, &Addr), bool> = Map::new("votes");
