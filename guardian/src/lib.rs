//! Guardian Contract - Circuit Breaker for the Bridge
//!
//! A fixed set of guardians votes to pause or unpause a registered target
//! contract. Votes are counted per round; once a round reaches the threshold
//! the pause flag flips, the round advances and the target receives
//! `Pause {}` or `Unpause {}`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
